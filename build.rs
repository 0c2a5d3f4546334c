use std::env;
use std::fs;
use std::path::PathBuf;

// Environment variable holding the VLEN configuration.
// `1` selects the minimum VLEN of the target, `k` in 6..=16 selects VLEN = 2^k.
const CONFIG_ENV: &str = "RVV_HAL_CONFIG";

const MIN_VLEN_CONFIG: u32 = 1;
const MIN_LOG2_VLEN: u32 = 6;
const MAX_LOG2_VLEN: u32 = 16;

// Minimum VLEN mandated by the V extension when no `zvl<N>b` feature is enabled.
const DEFAULT_MIN_VLEN: u32 = 128;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
struct VectorConfig {
    config: u32,
    vlen: u32,
    narrow: bool,
}

impl VectorConfig {
    fn resolve(config: u32, min_vlen: u32, narrow: bool) -> Result<Self, String> {
        let vlen = match config {
            MIN_VLEN_CONFIG => min_vlen,
            MIN_LOG2_VLEN..=MAX_LOG2_VLEN => 1 << config,
            _ => {
                return Err(format!(
                    "{CONFIG_ENV}={config} is out of range (expected {MIN_VLEN_CONFIG} or \
                     {MIN_LOG2_VLEN}..={MAX_LOG2_VLEN})"
                ))
            }
        };

        if !vlen.is_power_of_two() || vlen < (1 << MIN_LOG2_VLEN) {
            return Err(format!(
                "VLEN={vlen} is not a power of two of at least {} bits",
                1 << MIN_LOG2_VLEN
            ));
        }

        Ok(Self {
            config,
            vlen,
            narrow,
        })
    }

    fn lmul(&self) -> u32 {
        if self.narrow {
            1
        } else {
            2
        }
    }

    fn isa_name(&self) -> String {
        if self.config == MIN_VLEN_CONFIG {
            "RISC-V Vector Extension with Min. VLEN".to_string()
        } else {
            format!("RISC-V Vector Extension VLEN=2^{}", self.config)
        }
    }

    fn render(&self) -> String {
        format!(
            "pub const CONFIG: u32 = {};\n\
             pub const VLEN: usize = {};\n\
             pub const SP_LMUL: usize = {};\n\
             pub const DP_LMUL: usize = {};\n\
             pub const ISANAME: &str = {:?};\n",
            self.config,
            self.vlen,
            self.lmul(),
            self.lmul(),
            self.isa_name()
        )
    }
}

// Where the VLEN configuration comes from, in priority order
trait ConfigSource {
    fn is_applicable(&self) -> bool;
    fn config(&self) -> Result<u32, String>;
}

// Explicit configuration through the environment
struct EnvSource;
impl ConfigSource for EnvSource {
    fn is_applicable(&self) -> bool {
        env::var_os(CONFIG_ENV).is_some()
    }

    fn config(&self) -> Result<u32, String> {
        let raw = env::var(CONFIG_ENV).map_err(|e| format!("{CONFIG_ENV}: {e}"))?;
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(format!("{CONFIG_ENV} is set but empty"));
        }

        raw.parse::<u32>()
            .map_err(|e| format!("{CONFIG_ENV}={raw:?} is not an integer: {e}"))
    }
}

// Fallback: the minimum VLEN of the compilation target
struct MinVlenSource;
impl ConfigSource for MinVlenSource {
    fn is_applicable(&self) -> bool {
        true
    }

    fn config(&self) -> Result<u32, String> {
        Ok(MIN_VLEN_CONFIG)
    }
}

struct PlatformConfig;
impl PlatformConfig {
    fn sources() -> Vec<Box<dyn ConfigSource>> {
        vec![Box::new(EnvSource), Box::new(MinVlenSource)]
    }

    // Largest `zvl<N>b` target feature, e.g. `zvl256b` -> 256
    fn target_min_vlen() -> u32 {
        env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .filter_map(|feature| feature.strip_prefix("zvl")?.strip_suffix('b'))
            .filter_map(|bits| bits.parse::<u32>().ok())
            .max()
            .unwrap_or(DEFAULT_MIN_VLEN)
    }

    fn detect() -> Result<VectorConfig, String> {
        let narrow = env::var_os("CARGO_FEATURE_RVVM1").is_some();

        let config = Self::sources()
            .into_iter()
            .find(|source| source.is_applicable())
            .map(|source| source.config())
            .unwrap_or(Ok(MIN_VLEN_CONFIG))?;

        VectorConfig::resolve(config, Self::target_min_vlen(), narrow)
    }

    fn apply(config: &VectorConfig) {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        let path = out_dir.join("rvv_config.rs");

        fs::write(&path, config.render())
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));

        println!("applying: {}", config.isa_name());
        if config.config == MIN_VLEN_CONFIG {
            println!("cargo:rustc-cfg=rvv_min_vlen");
        }
        println!("cargo::rustc-check-cfg=cfg(rvv_min_vlen)");

        println!("cargo:rerun-if-env-changed={CONFIG_ENV}");
        println!("cargo:rerun-if-changed=build.rs");
    }
}

fn main() {
    match PlatformConfig::detect() {
        Ok(config) => PlatformConfig::apply(&config),
        // A bad configuration is a hard build failure, never a runtime one.
        Err(message) => panic!("invalid RISC-V vector configuration: {message}"),
    }
}

