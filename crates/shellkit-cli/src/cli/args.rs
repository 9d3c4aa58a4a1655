//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use shellkit::metadata::ProviderKind;
use shellkit::{
    Browser, DigestFormat, FileCategory, HashAlgorithm, IpVersion, PhoneFormat, SriAlgorithm,
    TextEncoding,
};

use crate::output::OutputFormat;

/// Personal shell utility toolkit
///
/// Every command takes its inputs as arguments, or one per line on stdin
/// when no argument (or a single `-`) is given. A failing input is
/// reported on stderr and the rest are still processed.
#[derive(Parser, Debug)]
#[command(name = "shellkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text to base64, or decode it back
    Base64(Base64Args),

    /// Hash strings
    Hash(HashArgs),

    /// Compute subresource integrity for files or URLs
    Sri(SriArgs),

    /// Check whether TCP ports accept connections
    Port(PortArgs),

    /// Generate IP addresses reserved for documentation
    #[command(disable_version_flag = true)]
    DocIp(DocIpArgs),

    /// Generate fictional 555 phone numbers
    DocPhone(DocPhoneArgs),

    /// Show extended file properties
    Props(PropsArgs),

    /// Size-to-duration ratio of media files
    Ratio(RatioArgs),

    /// Pick random files of a category and open them
    Random(RandomArgs),

    /// Convert command help text to markdown
    HelpMd(HelpMdArgs),

    /// Open URLs in a browser
    Browse(BrowseArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Text commands
// ============================================================================

#[derive(Args, Debug)]
pub struct Base64Args {
    /// Text to encode (or base64 to decode)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// Byte encoding of the text (utf8, utf16le, ascii)
    #[arg(short, long, default_value = "utf8")]
    pub encoding: TextEncoding,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Strings to hash
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Digest algorithm (md5, sha1, sha256, sha384, sha512) [default: config, else sha256]
    #[arg(short, long)]
    pub algorithm: Option<HashAlgorithm>,

    /// Digest encoding (hex, base64)
    #[arg(short, long, default_value = "hex")]
    pub format: DigestFormat,
}

#[derive(Args, Debug)]
pub struct SriArgs {
    /// Local files or http(s) URLs
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Digest algorithm (sha256, sha384, sha512) [default: config, else sha384]
    #[arg(short, long)]
    pub algorithm: Option<SriAlgorithm>,
}

// ============================================================================
// Network
// ============================================================================

#[derive(Args, Debug)]
pub struct PortArgs {
    /// Host names or addresses
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Port to probe (repeatable)
    #[arg(short, long = "port", required = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub ports: Vec<u16>,

    /// Connect timeout in milliseconds [default: config, else 200]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=60_000))]
    pub timeout: Option<u64>,
}

// ============================================================================
// Documentation data
// ============================================================================

#[derive(Args, Debug)]
pub struct DocIpArgs {
    /// IP version (4 or 6)
    #[arg(long = "version", id = "ip_version", value_name = "VERSION", default_value = "4")]
    pub version: IpVersion,

    /// How many addresses to generate
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub count: u16,
}

#[derive(Args, Debug)]
pub struct DocPhoneArgs {
    /// Number style (dashed, parens, dotted, e164, international, digits) [default: config, else dashed]
    #[arg(short, long)]
    pub format: Option<PhoneFormat>,

    /// How many numbers to generate
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=1000))]
    pub count: u16,
}

// ============================================================================
// Files
// ============================================================================

#[derive(Args, Debug)]
pub struct PropsArgs {
    /// Files to inspect
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Only show these property indices (repeatable)
    #[arg(short, long = "index")]
    pub indices: Vec<u32>,

    /// Only show properties whose name contains this text
    #[arg(short, long)]
    pub name: Option<String>,

    /// Metadata provider (portable, none)
    #[arg(long, default_value = "portable")]
    pub provider: ProviderKind,
}

#[derive(Args, Debug)]
pub struct RatioArgs {
    /// Media files to inspect
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Sort by ratio, highest first
    #[arg(short, long)]
    pub sort: bool,

    /// Metadata provider (portable, none)
    #[arg(long, default_value = "portable")]
    pub provider: ProviderKind,
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Directory to search recursively
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// Only consider paths containing this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// File category (all, video, audio, image, document)
    #[arg(short, long, default_value = "all")]
    pub category: FileCategory,

    /// Number of distinct files to pick
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Print the picks without opening them
    #[arg(long)]
    pub no_open: bool,

    /// Rebuild the category's file list cache first
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Args, Debug)]
pub struct HelpMdArgs {
    /// Read help text from a file instead of stdin
    #[arg(short, long, conflicts_with = "command")]
    pub file: Option<String>,

    /// Run `<PROGRAM> --help` and convert its output
    #[arg(short, long, value_name = "PROGRAM")]
    pub command: Option<String>,
}

// ============================================================================
// Browser
// ============================================================================

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// URLs to open (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Browser (default, chrome, firefox, edge, brave) [default: config, else default]
    #[arg(short, long)]
    pub browser: Option<Browser>,

    /// Open in a private window
    #[arg(short, long)]
    pub private: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set (`none` clears optional keys)
        value: String,
    },

    /// Show configuration file path
    Path,
}
