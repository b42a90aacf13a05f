use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["ping"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn ws_url_keeps_websocket_schemes() {
    assert_eq!(ws_url("ws://localhost:9001/").unwrap(), "ws://localhost:9001/");
    assert_eq!(ws_url("wss://game.example.test").unwrap(), "wss://game.example.test");
}

#[test]
fn ws_url_rewrites_http_schemes() {
    assert_eq!(ws_url("http://127.0.0.1:9001/").unwrap(), "ws://127.0.0.1:9001/");
    assert_eq!(ws_url("https://game.example.test/play").unwrap(), "wss://game.example.test/play");
}

#[test]
fn ws_url_trims_whitespace() {
    assert_eq!(ws_url("  ws://host:1/ \n").unwrap(), "ws://host:1/");
}

#[test]
fn ws_url_rejects_unknown_scheme() {
    let err = ws_url("ftp://host").unwrap_err();
    assert!(matches!(err, ClientError::InvalidServerUrl(url) if url == "ftp://host"));
}

#[test]
fn ws_url_rejects_missing_host() {
    assert!(matches!(ws_url("ws://"), Err(ClientError::InvalidServerUrl(_))));
    assert!(matches!(ws_url("ws:///path"), Err(ClientError::InvalidServerUrl(_))));
}

#[test]
fn explicit_flags_override_defaults() {
    let config = ClientConfig::from_cli(cli(&[
        "--server-url",
        "https://ping.example.test",
        "--name",
        "alice",
        "--connect-timeout-secs",
        "3",
    ]))
    .unwrap();
    assert_eq!(config.server_url, "wss://ping.example.test");
    assert_eq!(config.name, "alice");
    assert_eq!(config.connect_timeout, Duration::from_secs(3));
}

#[test]
fn blank_name_falls_back_to_default() {
    let config = ClientConfig::from_cli(cli(&["--server-url", "ws://h:1/", "--name", "   "])).unwrap();
    assert_eq!(config.name, DEFAULT_PLAYER_NAME);
}

#[test]
fn zero_timeout_is_raised_to_one_second() {
    let config = ClientConfig::from_cli(cli(&["--server-url", "ws://h:1/", "--connect-timeout-secs", "0"])).unwrap();
    assert_eq!(config.connect_timeout, Duration::from_secs(1));
}

#[test]
fn bad_url_fails_validation() {
    let result = ClientConfig::from_cli(cli(&["--server-url", "localhost:9001"]));
    assert!(matches!(result, Err(ClientError::InvalidServerUrl(_))));
}
