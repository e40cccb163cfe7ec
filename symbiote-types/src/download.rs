use percent_encoding::percent_decode_str;

/// Extracts the file name from a `Content-Disposition` header value.
/// An RFC 5987 `filename*` parameter takes precedence over a plain `filename`.
pub fn content_disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for parameter in header.split(';').map(str::trim) {
        let Some((name, value)) = parameter.split_once('=') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let value = value.trim();
                let encoded = value.split_once("''").map_or(value, |(_, encoded)| encoded);
                extended = percent_decode_str(encoded)
                    .decode_utf8()
                    .ok()
                    .map(|decoded| decoded.into_owned());
            }
            "filename" => {
                plain = Some(value.trim().trim_matches('"').to_owned());
            }
            _ => {}
        }
    }

    extended.or(plain)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("attachment; filename=\"configuration.zip\"", Some("configuration.zip"))]
    #[case("attachment; filename=configuration.zip", Some("configuration.zip"))]
    #[case("attachment; filename=\"plain.zip\"; filename*=UTF-8''platform%20p1.zip", Some("platform p1.zip"))]
    #[case("attachment", None)]
    #[case("attachment; filename=\"\"", None)]
    #[case("attachment; filename*=UTF-8''%C3%BCbersicht.zip", Some("übersicht.zip"))]
    #[case("attachment; filename=\"fallback.zip\"; filename*=UTF-8''%FF%FE.zip", Some("fallback.zip"))]
    fn The_file_name_should_be_taken_from_the_header(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_that!(content_disposition_filename(header).as_deref(), eq(expected));
    }
}
