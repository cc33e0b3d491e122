//! Fixed-boundary multipart/form-data encoding for Real-Debrid form POSTs.
//!
//! The API accepts form submissions delimited by a constant boundary token,
//! so the body is assembled directly instead of going through a generated
//! boundary.

/// Boundary token used for all multipart/form-data request bodies.
const BOUNDARY: &str = "realdebrid-boundary";

/// Returns the `Content-Type` value announcing [`BOUNDARY`].
pub fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Encodes the form fields as a multipart/form-data body.
///
/// One part is emitted per field, in input order, each closed with `\r\n` and
/// followed by the next delimiter. The body is terminated by the closing
/// `--realdebrid-boundary--` delimiter; an empty field list yields only that
/// terminator.
pub fn encode(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        body.push_str(&format!(
            "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
        ));
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn content_type_announces_boundary() {
        assert_eq!(
            content_type(),
            "multipart/form-data; boundary=realdebrid-boundary"
        );
    }

    #[test]
    fn encode_single_field() {
        assert_eq!(
            encode(&[("hello", "world")]),
            "--realdebrid-boundary\r\nContent-Disposition: form-data; name=\"hello\"\r\n\r\nworld\r\n--realdebrid-boundary--\r\n"
        );
    }

    #[test]
    fn encode_preserves_field_order() {
        assert_eq!(
            encode(&[("link", "https://example.com/file"), ("password", "hunter2")]),
            concat!(
                "--realdebrid-boundary\r\n",
                "Content-Disposition: form-data; name=\"link\"\r\n",
                "\r\n",
                "https://example.com/file\r\n",
                "--realdebrid-boundary\r\n",
                "Content-Disposition: form-data; name=\"password\"\r\n",
                "\r\n",
                "hunter2\r\n",
                "--realdebrid-boundary--\r\n",
            )
        );
    }

    #[test]
    fn encode_no_fields() {
        assert_eq!(encode(&[]), "--realdebrid-boundary--\r\n");
    }

    #[test]
    fn encode_empty_value() {
        assert_eq!(
            encode(&[("remote", "")]),
            "--realdebrid-boundary\r\nContent-Disposition: form-data; name=\"remote\"\r\n\r\n\r\n--realdebrid-boundary--\r\n"
        );
    }
}
