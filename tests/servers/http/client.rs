use std::net::SocketAddr;

use reqwest::header::ACCEPT;
use reqwest::Response;

/// HTTP client for the statistics server.
pub struct Client {
    server_addr: SocketAddr,
    reqwest: reqwest::Client,
}

impl Client {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            reqwest: reqwest::Client::new(),
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.reqwest.get(self.build_url(path)).send().await.unwrap()
    }

    pub async fn get_accepting(&self, path: &str, accept: &str) -> Response {
        self.reqwest
            .get(self.build_url(path))
            .header(ACCEPT, accept)
            .send()
            .await
            .unwrap()
    }

    fn build_url(&self, path: &str) -> String {
        format!("http://{}/{path}", &self.server_addr)
    }
}
