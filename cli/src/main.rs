use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing auth token; pass --token or set RADIUS_MGNT_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "radius-cli", about = "RADIUS management API CLI")]
struct Cli {
    #[arg(long, env = "RADIUS_MGNT_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[arg(long, env = "RADIUS_MGNT_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Refresh,
    Profile,
    ChangePassword {
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
    },
    Stats,
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    User(UserCommand),
    Stats,
    AuthLogs {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 20)]
        limit: u64,
        #[arg(long)]
        username: Option<String>,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value_t = false)]
        admin: bool,
    },
    Passwd {
        user_id: u64,
        #[arg(long)]
        password: String,
    },
    Ban {
        user_id: u64,
    },
    Delete {
        user_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        token: cli.token,
    };

    match cli.command {
        Command::Login { username, password } => run_login(&ctx, &username, &password).await,
        Command::Refresh => run_refresh(&ctx).await,
        Command::Profile => run_profile(&ctx).await,
        Command::ChangePassword {
            old_password,
            new_password,
        } => run_change_password(&ctx, &old_password, &new_password).await,
        Command::Stats => run_stats(&ctx).await,
        Command::Admin(admin) => run_admin(&ctx, admin).await,
    }
}

async fn run_login(cli: &CliContext, username: &str, password: &str) -> Result<(), CliError> {
    let body = serde_json::json!({ "username": username, "password": password });
    let json = send_request(
        cli,
        reqwest::Method::POST,
        "/api/v1/auth/login",
        Some(body),
        None,
    )
    .await?;
    print_json(&json)?;
    print_token_hint(&json);
    Ok(())
}

async fn run_refresh(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::POST, "/api/v1/auth/refresh", None).await?;
    print_json(&json)?;
    print_token_hint(&json);
    Ok(())
}

async fn run_profile(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/api/v1/user/profile", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_change_password(
    cli: &CliContext,
    old_password: &str,
    new_password: &str,
) -> Result<(), CliError> {
    let body = serde_json::json!({
        "old_password": old_password,
        "new_password": new_password,
    });
    let json = api_request(
        cli,
        reqwest::Method::PUT,
        "/api/v1/user/change-password",
        Some(body),
    )
    .await?;
    print_json(&json)?;
    Ok(())
}

async fn run_stats(cli: &CliContext) -> Result<(), CliError> {
    let json = api_request(cli, reqwest::Method::GET, "/api/v1/user/stats", None).await?;
    print_json(&json)?;
    Ok(())
}

async fn run_admin(cli: &CliContext, admin: AdminCommand) -> Result<(), CliError> {
    match admin.command {
        AdminSubcommand::User(user) => run_admin_user(cli, user).await,
        AdminSubcommand::Stats => {
            let json = api_request(cli, reqwest::Method::GET, "/api/v1/admin/stats", None).await?;
            print_json(&json)?;
            Ok(())
        }
        AdminSubcommand::AuthLogs {
            page,
            limit,
            username,
        } => {
            let path = match username.as_deref().filter(|name| !name.is_empty()) {
                Some(name) => {
                    let name = encode_query_value(name);
                    format!("/api/v1/admin/auth-logs?page={page}&limit={limit}&username={name}")
                }
                None => format!("/api/v1/admin/auth-logs?page={page}&limit={limit}"),
            };
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
    }
}

async fn run_admin_user(cli: &CliContext, user: UserCommand) -> Result<(), CliError> {
    match user.command {
        UserSubcommand::List { page, limit } => {
            let path = format!("/api/v1/admin/users?page={page}&limit={limit}");
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
        UserSubcommand::Create {
            username,
            email,
            password,
            admin,
        } => {
            let mut body = Map::new();
            body.insert("username".to_owned(), Value::String(username));
            body.insert("email".to_owned(), Value::String(email));
            body.insert("password".to_owned(), Value::String(password));
            if admin {
                body.insert("is_admin".to_owned(), Value::Bool(true));
            }
            let json = api_request(
                cli,
                reqwest::Method::POST,
                "/api/v1/admin/users",
                Some(Value::Object(body)),
            )
            .await?;
            print_json(&json)?;
            Ok(())
        }
        UserSubcommand::Passwd { user_id, password } => {
            let path = format!("/api/v1/admin/users/{user_id}/password");
            let body = serde_json::json!({ "new_password": password });
            let json = api_request(cli, reqwest::Method::PUT, &path, Some(body)).await?;
            print_json(&json)?;
            Ok(())
        }
        UserSubcommand::Ban { user_id } => {
            let path = format!("/api/v1/admin/users/{user_id}/ban");
            let json = api_request(cli, reqwest::Method::PUT, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
        UserSubcommand::Delete { user_id } => {
            let path = format!("/api/v1/admin/users/{user_id}");
            let json = api_request(cli, reqwest::Method::DELETE, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
    }
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
    send_request(cli, method, path, body, Some(token)).await
}

async fn send_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Result<Value, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))?,
        );
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(10))
        .build()?;
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: server_message(&value),
        });
    }

    Ok(value)
}

// RFC 3986 unreserved characters pass through, everything else is escaped.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn server_message(value: &Value) -> String {
    value
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| value.to_string(), ToOwned::to_owned)
}

fn print_token_hint(value: &Value) {
    if let Some(token) = value.get("token").and_then(Value::as_str) {
        eprintln!("export RADIUS_MGNT_TOKEN={token}");
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
