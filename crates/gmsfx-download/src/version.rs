//! Base version of the remote sound collection

/// Returned by [`fetch_base_version`] when the remote version cannot be read
pub const UNDEFINED: &str = "undefined";

/// Base version known at build time. Faster than asking the remote, but may
/// be older than the actual collection.
pub const BASE_VERSION_STATIC: &str = "13.05.2024";

pub fn static_base_version() -> &'static str {
    BASE_VERSION_STATIC
}

/// Fetch the base version published at `url`.
///
/// Line breaks in the body are dropped and the lines joined without a
/// separator. Never fails: any error yields [`UNDEFINED`].
pub async fn fetch_base_version(client: &reqwest::Client, url: &str) -> String {
    match try_fetch(client, url).await {
        Ok(version) => version,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Base version unavailable");
            UNDEFINED.to_string()
        }
    }
}

async fn try_fetch(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(join_lines(&body))
}

fn join_lines(body: &str) -> String {
    body.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("13.05.2024\n"), "13.05.2024");
        assert_eq!(join_lines("13.05\r\n2024\r\n"), "13.052024");
        assert_eq!(join_lines("a\rb\nc"), "abc");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn test_static_base_version() {
        assert_eq!(static_base_version(), "13.05.2024");
    }

    #[tokio::test]
    async fn test_invalid_url_is_undefined() {
        let client = reqwest::Client::new();

        assert_eq!(fetch_base_version(&client, "not a url").await, UNDEFINED);
    }
}
