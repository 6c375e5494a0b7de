use crate::error::{Result, SyncError};
use reqwest::Client;
use url::Url;

/// Fetch the CSV payload at `url_str` and return the response body as text.
///
/// Any transport failure or non-success status becomes a download error
/// carrying the reqwest detail, which names the HTTP status. Redirect and
/// timeout behavior is the reqwest client default.
pub async fn download_csv(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)
        .map_err(|e| SyncError::Download(format!("invalid url `{url_str}`: {e}")))?;

    let resp = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| SyncError::Download(e.to_string()))?
        .error_for_status()
        .map_err(|e| SyncError::Download(e.to_string()))?;

    resp.text()
        .await
        .map_err(|e| SyncError::Download(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral local port.
    async fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}/branches.csv")
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let body = "BANK,IFSC\nSBI,SBIN0000001\n";
        let url = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-type: text/csv\r\ncontent-length: 26\r\n\r\nBANK,IFSC\nSBI,SBIN0000001\n",
        )
        .await;

        let fetched = download_csv(&Client::new(), &url).await.unwrap();
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn non_success_status_is_a_download_error() {
        let url = one_shot_server("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n").await;

        let err = download_csv(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, SyncError::Download(_)));
        assert!(err.to_string().contains("404"), "got: {err}");
    }

    #[tokio::test]
    async fn invalid_url_is_a_download_error() {
        let err = download_csv(&Client::new(), "not a url").await.unwrap_err();
        assert!(matches!(err, SyncError::Download(_)));
    }
}
