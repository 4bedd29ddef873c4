use std::{
    net::{TcpStream, ToSocketAddrs},
    thread,
    time::{Duration, Instant},
};

use url::Url;

use crate::{BACKEND_PING_TIMEOUT_MS, BACKEND_READY_POLL_INTERVAL, BACKEND_READY_TIMEOUT};

/// One TCP-level reachability probe against the game URL's host and port.
pub(crate) fn ping_game_endpoint(game_url: &str, timeout_ms: u64) -> bool {
    let parsed = match Url::parse(game_url) {
        Ok(url) => url,
        Err(_) => return false,
    };
    let host = match parsed.host_str() {
        Some(host) => host.to_string(),
        None => return false,
    };
    let port = parsed.port_or_known_default().unwrap_or(80);
    let timeout = Duration::from_millis(timeout_ms.max(50));

    let addrs = match (host.as_str(), port).to_socket_addrs() {
        Ok(addrs) => addrs.collect::<Vec<_>>(),
        Err(_) => return false,
    };
    addrs
        .iter()
        .any(|address| TcpStream::connect_timeout(address, timeout).is_ok())
}

/// Polls until the backend accepts connections, the deadline passes, or
/// `give_up` says to stop early. True means the endpoint answered.
pub(crate) fn wait_for_game_endpoint<G>(game_url: &str, give_up: G) -> bool
where
    G: Fn() -> bool,
{
    let start_time = Instant::now();
    loop {
        if give_up() {
            return false;
        }
        if ping_game_endpoint(game_url, BACKEND_PING_TIMEOUT_MS) {
            return true;
        }
        if start_time.elapsed() >= BACKEND_READY_TIMEOUT {
            return false;
        }
        thread::sleep(BACKEND_READY_POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::{ping_game_endpoint, wait_for_game_endpoint};

    #[test]
    fn ping_succeeds_against_a_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        assert!(ping_game_endpoint(&format!("http://127.0.0.1:{port}/"), 500));
    }

    #[test]
    fn ping_fails_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);
        assert!(!ping_game_endpoint(&format!("http://127.0.0.1:{port}/"), 200));
    }

    #[test]
    fn ping_rejects_urls_without_a_usable_host() {
        assert!(!ping_game_endpoint("not a url", 100));
        assert!(!ping_game_endpoint("file:///tmp/game", 100));
    }

    #[test]
    fn waiting_stops_immediately_when_told_to_give_up() {
        let start = std::time::Instant::now();
        assert!(!wait_for_game_endpoint("http://127.0.0.1:1/", || true));
        assert!(start.elapsed() < crate::BACKEND_READY_TIMEOUT);
    }

    #[test]
    fn waiting_returns_once_the_endpoint_answers() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        assert!(wait_for_game_endpoint(
            &format!("http://127.0.0.1:{port}/"),
            || false
        ));
    }
}
