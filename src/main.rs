use anyhow::{anyhow, Context};
use chaosencrypt::{ChaosConfig, ChaosEncrypt};
use clap::{Args, Parser, Subcommand};
use num_bigint::BigUint;
use std::fs;
use std::path::PathBuf;

/// CHAOSENCRYPT - Prime-based Chaotic Encryption CLI
///
/// Encrypts UTF-8 text with a chaotic-map cipher whose per-chunk parameters
/// derive from a shared secret. Ciphertext travels as hex; the MAC travels
/// separately as a decimal string (written to a `.mac` sidecar file when an
/// output file is given).
#[derive(Parser)]
#[command(name = "chaosencrypt")]
#[command(version = chaosencrypt::VERSION)]
#[command(about = "Prime-based Chaotic Encryption", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Cipher parameters shared by both subcommands. Both parties must agree on
/// all of them out-of-band; nothing in the ciphertext identifies them.
#[derive(Args)]
struct CipherOpts {
    /// Precision for calculations (modulus = 10^precision)
    #[arg(long, default_value_t = 12)]
    precision: u32,

    /// Comma-separated list of primes
    #[arg(long, default_value = "9973")]
    primes: String,

    /// Shared secret
    #[arg(long, env = "CHAOSENCRYPT_SECRET", hide_env_values = true)]
    secret: String,

    /// Chunk size in bytes for processing
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,

    /// Base k value for iterations
    #[arg(long, default_value_t = 6)]
    base_k: u32,

    /// Disable dynamic per-chunk k derivation
    #[arg(long)]
    no_dynamic_k: bool,

    /// Use direct-modular mode instead of XOR keystream mode
    #[arg(long)]
    no_xor: bool,

    /// Disable MAC computation/verification
    #[arg(long)]
    no_mac: bool,
}

impl CipherOpts {
    fn build_engine(&self) -> anyhow::Result<ChaosEncrypt> {
        let primes = self
            .primes
            .split(',')
            .map(|p| p.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid prime list: provide comma-separated integers, e.g. 9973,9967")?;

        let mut config = ChaosConfig::new(self.secret.as_bytes());
        config.precision = self.precision;
        config.primes = primes;
        config.chunk_size = self.chunk_size;
        config.base_k = self.base_k;
        config.dynamic_k = !self.no_dynamic_k;
        config.xor_mode = !self.no_xor;
        config.mac_enabled = !self.no_mac;

        Ok(ChaosEncrypt::new(config)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt {
        #[command(flatten)]
        opts: CipherOpts,

        /// Input file containing UTF-8 text to encrypt
        #[arg(short, long, conflicts_with = "message")]
        input_file: Option<PathBuf>,

        /// Output file for hex ciphertext (MAC goes to <file>.mac)
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// Message to encrypt
        message: Option<String>,
    },
    /// Decrypt a hex ciphertext
    Decrypt {
        #[command(flatten)]
        opts: CipherOpts,

        /// MAC value as a decimal string
        #[arg(long)]
        mac_value: Option<String>,

        /// Input file containing hex ciphertext (MAC read from <file>.mac)
        #[arg(short, long, conflicts_with = "ciphertext")]
        input_file: Option<PathBuf>,

        /// Output file for decrypted text
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// Ciphertext as a hex string
        ciphertext: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            opts,
            input_file,
            output_file,
            message,
        } => {
            let plaintext = match (message, input_file) {
                (Some(msg), None) => msg,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading input file {}", path.display()))?,
                (None, None) => {
                    return Err(anyhow!("provide either a message or --input-file"));
                }
                (Some(_), Some(_)) => unreachable!("clap conflicts_with"),
            };

            let engine = opts.build_engine()?;
            let (ciphertext, mac) = engine.encrypt(&plaintext)?;
            let hex_ct = hex::encode(&ciphertext);

            if let Some(path) = output_file {
                fs::write(&path, &hex_ct)
                    .with_context(|| format!("writing output file {}", path.display()))?;
                println!("[✓] Encrypted data written to {}", path.display());
                if let Some(mac) = &mac {
                    let mac_path = sidecar_mac_path(&path);
                    fs::write(&mac_path, mac.to_string())
                        .with_context(|| format!("writing MAC file {}", mac_path.display()))?;
                    println!("[✓] MAC value written to {}", mac_path.display());
                }
            } else {
                println!("Ciphertext (hex):");
                println!("{}", hex_ct);
                if let Some(mac) = &mac {
                    println!("\nMAC value:");
                    println!("{}", mac);
                }
            }
        }

        Commands::Decrypt {
            opts,
            mac_value,
            input_file,
            output_file,
            ciphertext,
        } => {
            let (hex_ct, sidecar_mac) = match (ciphertext, input_file) {
                (Some(ct), None) => (ct, None),
                (None, Some(path)) => {
                    let ct = fs::read_to_string(&path)
                        .with_context(|| format!("reading input file {}", path.display()))?;
                    let mac_path = sidecar_mac_path(&path);
                    let sidecar = match fs::read_to_string(&mac_path) {
                        Ok(s) => Some(s),
                        Err(_) => {
                            if !opts.no_mac && mac_value.is_none() {
                                eprintln!(
                                    "[!] Warning: MAC file {} not found; decrypting without verification",
                                    mac_path.display()
                                );
                            }
                            None
                        }
                    };
                    (ct, sidecar)
                }
                (None, None) => {
                    return Err(anyhow!("provide either a ciphertext or --input-file"));
                }
                (Some(_), Some(_)) => unreachable!("clap conflicts_with"),
            };

            let ciphertext = hex::decode(hex_ct.trim())
                .context("invalid hex ciphertext: provide a valid hexadecimal string")?;

            let mac = match mac_value.or(sidecar_mac) {
                Some(s) => Some(
                    s.trim()
                        .parse::<BigUint>()
                        .context("MAC value must be a decimal integer")?,
                ),
                None => None,
            };

            let engine = opts.build_engine()?;
            let plaintext = engine.decrypt(&ciphertext, mac.as_ref())?;

            if let Some(path) = output_file {
                fs::write(&path, &plaintext)
                    .with_context(|| format!("writing output file {}", path.display()))?;
                println!("[✓] Decrypted data written to {}", path.display());
            } else {
                println!("Decrypted message:");
                println!("{}", plaintext);
            }
        }
    }

    Ok(())
}

/// MAC sidecar path: `<file>.mac` appended to the full filename.
fn sidecar_mac_path(path: &PathBuf) -> PathBuf {
    let mut s = path.clone().into_os_string();
    s.push(".mac");
    PathBuf::from(s)
}
