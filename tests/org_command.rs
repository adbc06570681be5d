use assert_cmd::Command;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use predicates::prelude::*;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::thread;

/// (status line, X-Cf-Warnings value, body) per request path.
type Routes = HashMap<&'static str, (&'static str, &'static str, &'static str)>;

const ORGS: &str = r#"{"next_url": null, "resources": [{
    "metadata": {"guid": "some-org-guid"},
    "entity": {"name": "some-org", "quota_definition_guid": "some-quota-guid"}
}]}"#;

const NO_ORGS: &str = r#"{"next_url": null, "resources": []}"#;

const SHARED_DOMAINS: &str = r#"{"resources": [
    {"metadata": {"guid": "d1"}, "entity": {"name": "a-shared.com"}},
    {"metadata": {"guid": "d3"}, "entity": {"name": "c-shared.com"}}
]}"#;

const PRIVATE_DOMAINS: &str = r#"{"resources": [
    {"metadata": {"guid": "d2"}, "entity": {"name": "b-private.com"}}
]}"#;

const QUOTA: &str = r#"{"metadata": {"guid": "some-quota-guid"}, "entity": {
    "name": "default", "memory_limit": 10240, "instance_memory_limit": 0,
    "total_routes": 1000, "total_services": 100, "non_basic_services_allowed": false,
    "app_instance_limit": -1, "total_reserved_route_ports": 0
}}"#;

const SPACES: &str = r#"{"resources": [
    {"metadata": {"guid": "s2"}, "entity": {"name": "staging"}},
    {"metadata": {"guid": "s1"}, "entity": {"name": "dev"}}
]}"#;

const SPACE_QUOTAS: &str = r#"{"resources": []}"#;

fn full_routes(orgs: &'static str) -> Routes {
    let mut routes = Routes::new();
    routes.insert("/v2/organizations", ("200 OK", "org-warning", orgs));
    routes.insert("/v2/shared_domains", ("200 OK", "", SHARED_DOMAINS));
    routes.insert(
        "/v2/organizations/some-org-guid/private_domains",
        ("200 OK", "", PRIVATE_DOMAINS),
    );
    routes.insert(
        "/v2/quota_definitions/some-quota-guid",
        ("200 OK", "quota%20warning", QUOTA),
    );
    routes.insert("/v2/organizations/some-org-guid/spaces", ("200 OK", "", SPACES));
    routes.insert(
        "/v2/organizations/some-org-guid/space_quota_definitions",
        ("200 OK", "", SPACE_QUOTAS),
    );
    routes
}

/// Serves `routes` until the test process exits. Unknown paths get a 404.
fn serve(routes: Routes) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let path = read_path(&mut stream);
            let (status, warnings, body) = routes
                .get(path.as_str())
                .copied()
                .unwrap_or(("404 Not Found", "", r#"{"description": "Unknown request"}"#));
            let mut response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                status,
                body.len()
            );
            if !warnings.is_empty() {
                response.push_str(&format!("X-Cf-Warnings: {}\r\n", warnings));
            }
            response.push_str("\r\n");
            response.push_str(body);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

fn read_path(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk).unwrap_or(0);
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    let head = String::from_utf8_lossy(&buf);
    let target = head.split_whitespace().nth(1).unwrap_or("");
    target.split('?').next().unwrap_or("").to_string()
}

fn access_token(user: &str) -> String {
    format!(
        "bearer {}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"user_name":"{}"}}"#, user))
    )
}

fn write_config(dir: &Path, target: &str, token: &str) {
    let config = serde_json::json!({
        "target": target,
        "access_token": token,
        "skip_ssl_validation": false,
    });
    std::fs::write(dir.join("config.json"), config.to_string()).unwrap();
}

fn cloudctl(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cloudctl").unwrap();
    cmd.env("CLOUDCTL_HOME", home).env_remove("CLOUDCTL_LOG");
    cmd
}

#[test]
fn test_org_summary() {
    let home = tempfile::tempdir().unwrap();
    let target = serve(full_routes(ORGS));
    write_config(home.path(), &target, &access_token("some-user"));

    let expected = "Getting info for org some-org as some-user...\n\
                    \n\
                    some-org:\n\
                    domains:        a-shared.com, c-shared.com, b-private.com\n\
                    quota:          default (10240M memory limit, 0M instance memory limit, 1000 routes, 100 services, paid services disallowed, unlimited app instance limit, 0 route ports)\n\
                    spaces:         dev, staging\n\
                    space quotas:\n\
                    OK\n";

    cloudctl(home.path())
        .args(["org", "some-org"])
        .assert()
        .success()
        .stdout(expected)
        .stderr("org-warning\nquota warning\n");
}

#[test]
fn test_org_guid_only() {
    let home = tempfile::tempdir().unwrap();
    let target = serve(full_routes(ORGS));
    write_config(home.path(), &target, &access_token("some-user"));

    cloudctl(home.path())
        .args(["org", "some-org", "--guid"])
        .assert()
        .success()
        .stdout("some-org-guid\n")
        .stderr("org-warning\n");
}

#[test]
fn test_org_not_found() {
    let home = tempfile::tempdir().unwrap();
    let target = serve(full_routes(NO_ORGS));
    write_config(home.path(), &target, &access_token("some-user"));

    cloudctl(home.path())
        .args(["org", "missing-org"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("OK").not())
        .stderr(predicate::str::contains("org-warning"))
        .stderr(predicate::str::contains("Organization 'missing-org' not found."));
}

#[test]
fn test_quota_lookup_failure_reports_warnings() {
    let home = tempfile::tempdir().unwrap();
    let mut routes = full_routes(ORGS);
    routes.insert(
        "/v2/quota_definitions/some-quota-guid",
        ("404 Not Found", "quota%20warning", r#"{"description": "gone"}"#),
    );
    let target = serve(routes);
    write_config(home.path(), &target, &access_token("some-user"));

    cloudctl(home.path())
        .args(["org", "some-org"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("org-warning\nquota warning\n"))
        .stderr(predicate::str::contains("Quota definition 'some-quota-guid' not found"));
}

#[test]
fn test_not_logged_in() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "http://127.0.0.1:9", "");

    cloudctl(home.path())
        .args(["org", "some-org"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_no_target() {
    let home = tempfile::tempdir().unwrap();

    cloudctl(home.path())
        .args(["org", "some-org"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stderr(predicate::str::contains("No API endpoint set"));
}

#[test]
fn test_version() {
    let home = tempfile::tempdir().unwrap();

    cloudctl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cloudctl 0.1.0"));
}
