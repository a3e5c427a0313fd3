use clap::Parser;
use quickbite_core::domain::common::{AuthConfig, DatabaseConfig, LLMConfig, QuickBiteConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "quickbite-api", about = "QuickBite recipe suggestion API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "quickbite")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "quickbite")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "quickbite")]
    pub database_name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = 86_400)]
    pub token_ttl_secs: u64,

    /// Comma-separated emails that receive the admin role at signup.
    #[arg(long, env = "ADMIN_EMAILS", value_delimiter = ',', num_args = 0..)]
    pub admin_emails: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct LLMArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long, env = "LLM_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_request_timeout_secs: u64,
}

impl From<Args> for QuickBiteConfig {
    fn from(args: Args) -> Self {
        QuickBiteConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                request_timeout_secs: args.llm.llm_request_timeout_secs,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                token_ttl_secs: args.auth.token_ttl_secs,
                admin_emails: args.auth.admin_emails,
            },
        }
    }
}
