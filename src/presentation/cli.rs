// Command line arguments
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Split a CloudWatch dashboard into one dashboard per brand range",
    long_about = None
)]
pub struct Args {
    /// AWS Access Key ID
    #[arg(long = "aws-access-key-id", env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub aws_access_key_id: String,

    /// AWS Secret Access Key
    #[arg(long = "aws-secret-access-key", env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_access_key: String,

    /// AWS session token for temporary credentials
    #[arg(long = "aws-session-token", env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// AWS Region Name (default: us-west-2)
    #[arg(long = "region-name")]
    pub region_name: Option<String>,

    /// Source dashboard name
    #[arg(long = "dashboard-name")]
    pub dashboard_name: String,

    /// Comma-separated brand ranges (e.g., l-m,n-p)
    #[arg(long = "ranges")]
    pub ranges: String,

    /// Override the monitoring endpoint URL
    #[arg(long = "endpoint-url")]
    pub endpoint_url: Option<String>,

    /// Prefix for generated dashboard names (default: Zen_Error_Analysis)
    #[arg(long = "dashboard-prefix")]
    pub dashboard_prefix: Option<String>,

    /// Fail on malformed dashboard bodies instead of treating missing fields as empty
    #[arg(long = "strict")]
    pub strict: bool,

    /// Partition and print without publishing
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
