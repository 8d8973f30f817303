//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.huemix/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Board sizes are read once here and stay fixed for the whole session.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::board::{BoardConfig, BoardError};
use crate::core::state::{DEFAULT_RESET_DELAY, RoundRules};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HuemixConfig {
    #[serde(default)]
    pub board: BoardSection,
    #[serde(default)]
    pub round: RoundSection,
    #[serde(default)]
    pub audio: AudioSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardSection {
    pub left_count: Option<usize>,
    pub right_count: Option<usize>,
    pub tile_px: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoundSection {
    pub reset_delay_ms: Option<u64>,
    pub restart_cancels_pending_reset: Option<bool>,
    pub frame_rate: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudioSection {
    pub muted: Option<bool>,
    pub move_sound: Option<String>,
    pub win_sound: Option<String>,
    pub lose_sound: Option<String>,
}

/// Values given on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub left_count: Option<usize>,
    pub right_count: Option<usize>,
    pub seed: Option<u64>,
    pub mute: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TILE_PX: u32 = 48;
pub const MIN_TILE_PX: u32 = 8;
pub const DEFAULT_FRAME_RATE: u32 = 30;
pub const MAX_FRAME_RATE: u32 = 240;
pub const DEFAULT_MOVE_SOUND: &str = "sounds/move.wav";
pub const DEFAULT_WIN_SOUND: &str = "sounds/win.wav";
pub const DEFAULT_LOSE_SOUND: &str = "sounds/lose.wav";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundPaths {
    pub move_cue: PathBuf,
    pub win_cue: PathBuf,
    pub lose_cue: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub board: BoardConfig,
    pub tile_px: u32,
    pub rules: RoundRules,
    pub frame_rate: u32,
    pub seed: Option<u64>,
    pub muted: bool,
    pub sounds: SoundPaths,
}

impl ResolvedConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Board(BoardError),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Board(e) => write!(f, "invalid board: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        ConfigError::Board(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.huemix`, where the config file and sounds live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".huemix"))
}

/// Returns the path to `~/.huemix/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.huemix/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HuemixConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HuemixConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HuemixConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HuemixConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HuemixConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HuemixConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Huemix Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [board]
# left_count = 7                     # red tiles, 1 to 64 (or HUEMIX_LEFT_COUNT, --left)
# right_count = 7                    # blue tiles, 1 to 64 (or HUEMIX_RIGHT_COUNT, --right)
# tile_px = 48                       # logical tile size on the canvas

# [round]
# reset_delay_ms = 1400              # pause after a lock before the next round
# restart_cancels_pending_reset = true
# frame_rate = 30                    # redraws per second, 1 to 240

# [audio]
# muted = false                      # or HUEMIX_MUTE=1, --mute
# move_sound = "sounds/move.wav"     # Paths relative to ~/.huemix/
# win_sound = "sounds/win.wav"
# lose_sound = "sounds/lose.wav"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HuemixConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let base = config_dir().unwrap_or_else(|| PathBuf::from("."));
    resolve_with(config, cli, &base, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an explicit sound directory and env lookup.
pub fn resolve_with(
    config: &HuemixConfig,
    cli: &CliOverrides,
    sound_base: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Board: CLI → env → config → default
    let left_count = pick_count(cli.left_count, &env, "HUEMIX_LEFT_COUNT", config.board.left_count)?;
    let right_count =
        pick_count(cli.right_count, &env, "HUEMIX_RIGHT_COUNT", config.board.right_count)?;
    let board = BoardConfig::new(left_count, right_count)?;

    let tile_px = config.board.tile_px.unwrap_or(DEFAULT_TILE_PX);
    if tile_px < MIN_TILE_PX {
        return Err(ConfigError::Invalid(format!(
            "tile_px must be at least {MIN_TILE_PX}, got {tile_px}"
        )));
    }

    let frame_rate = config.round.frame_rate.unwrap_or(DEFAULT_FRAME_RATE);
    if frame_rate == 0 || frame_rate > MAX_FRAME_RATE {
        return Err(ConfigError::Invalid(format!(
            "frame_rate must be between 1 and {MAX_FRAME_RATE}, got {frame_rate}"
        )));
    }

    let rules = RoundRules {
        reset_delay: config
            .round
            .reset_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RESET_DELAY),
        restart_cancels_pending_reset: config
            .round
            .restart_cancels_pending_reset
            .unwrap_or(true),
    };

    // Seed: CLI → env
    let seed = match cli.seed {
        Some(seed) => Some(seed),
        None => match env("HUEMIX_SEED") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("HUEMIX_SEED is not a number: {raw}"))
            })?),
            None => None,
        },
    };

    // Mute: any source turning it on wins
    let muted = cli.mute
        || env("HUEMIX_MUTE").is_some_and(|v| is_truthy(&v))
        || config.audio.muted.unwrap_or(false);

    let sound = |configured: &Option<String>, default: &str| {
        sound_base.join(configured.as_deref().unwrap_or(default))
    };
    let sounds = SoundPaths {
        move_cue: sound(&config.audio.move_sound, DEFAULT_MOVE_SOUND),
        win_cue: sound(&config.audio.win_sound, DEFAULT_WIN_SOUND),
        lose_cue: sound(&config.audio.lose_sound, DEFAULT_LOSE_SOUND),
    };

    Ok(ResolvedConfig {
        board,
        tile_px,
        rules,
        frame_rate,
        seed,
        muted,
        sounds,
    })
}

fn pick_count(
    cli: Option<usize>,
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    file: Option<usize>,
) -> Result<usize, ConfigError> {
    if let Some(count) = cli {
        return Ok(count);
    }
    if let Some(raw) = env(key) {
        return raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} is not a number: {raw}")));
    }
    Ok(file.unwrap_or(BoardConfig::DEFAULT_SIDE_COUNT))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Side;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn resolve_plain(config: &HuemixConfig, cli: &CliOverrides) -> ResolvedConfig {
        resolve_with(config, cli, Path::new("/snd"), no_env).unwrap()
    }

    #[test]
    fn test_default_config_parses() {
        let config = HuemixConfig::default();
        assert!(config.board.left_count.is_none());
        assert!(config.audio.muted.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_plain(&HuemixConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.board, BoardConfig::default());
        assert_eq!(resolved.tile_px, DEFAULT_TILE_PX);
        assert_eq!(resolved.rules, RoundRules::default());
        assert_eq!(resolved.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(resolved.seed, None);
        assert!(!resolved.muted);
        assert_eq!(resolved.sounds.win_cue, PathBuf::from("/snd/sounds/win.wav"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HuemixConfig {
            board: BoardSection {
                left_count: Some(4),
                right_count: Some(9),
                tile_px: Some(32),
            },
            round: RoundSection {
                reset_delay_ms: Some(900),
                restart_cancels_pending_reset: Some(false),
                frame_rate: Some(60),
            },
            audio: AudioSection {
                muted: Some(true),
                move_sound: Some("click.ogg".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve_plain(&config, &CliOverrides::default());
        assert_eq!(resolved.board.left_count(), 4);
        assert_eq!(resolved.board.right_count(), 9);
        assert_eq!(resolved.tile_px, 32);
        assert_eq!(resolved.rules.reset_delay, Duration::from_millis(900));
        assert!(!resolved.rules.restart_cancels_pending_reset);
        assert_eq!(resolved.frame_interval(), Duration::from_secs(1) / 60);
        assert!(resolved.muted);
        assert_eq!(resolved.sounds.move_cue, PathBuf::from("/snd/click.ogg"));
    }

    #[test]
    fn test_resolve_cli_wins_over_env_and_file() {
        let config = HuemixConfig {
            board: BoardSection {
                left_count: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            left_count: Some(5),
            seed: Some(8),
            ..Default::default()
        };
        let env = |key: &str| match key {
            "HUEMIX_LEFT_COUNT" => Some("6".to_string()),
            "HUEMIX_RIGHT_COUNT" => Some("2".to_string()),
            "HUEMIX_SEED" => Some("99".to_string()),
            _ => None,
        };
        let resolved = resolve_with(&config, &cli, Path::new("/snd"), env).unwrap();
        assert_eq!(resolved.board.left_count(), 5);
        assert_eq!(resolved.board.right_count(), 2);
        assert_eq!(resolved.seed, Some(8));
    }

    #[test]
    fn test_env_mute_and_seed() {
        let env = |key: &str| match key {
            "HUEMIX_MUTE" => Some("yes".to_string()),
            "HUEMIX_SEED" => Some(" 1234 ".to_string()),
            _ => None,
        };
        let resolved =
            resolve_with(&HuemixConfig::default(), &CliOverrides::default(), Path::new("."), env)
                .unwrap();
        assert!(resolved.muted);
        assert_eq!(resolved.seed, Some(1234));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let cli = CliOverrides {
            right_count: Some(0),
            ..Default::default()
        };
        let err = resolve_with(&HuemixConfig::default(), &cli, Path::new("."), no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Board(BoardError::EmptySide { side: Side::Blue })
        ));
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        let cli = CliOverrides {
            left_count: Some(usize::MAX),
            ..Default::default()
        };
        let err = resolve_with(&HuemixConfig::default(), &cli, Path::new("."), no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Board(BoardError::TooManyTiles { side: Side::Red, .. })
        ));

        let env = |key: &str| (key == "HUEMIX_RIGHT_COUNT").then(|| "100000000".to_string());
        let err = resolve_with(&HuemixConfig::default(), &CliOverrides::default(), Path::new("."), env)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Board(BoardError::TooManyTiles { side: Side::Blue, .. })
        ));

        let mut config = HuemixConfig::default();
        config.board.left_count = Some(BoardConfig::MAX_SIDE_COUNT);
        config.board.right_count = Some(BoardConfig::MAX_SIDE_COUNT);
        assert_eq!(resolve_plain(&config, &CliOverrides::default()).board.total_tiles(), 129);
    }

    #[test]
    fn test_bad_env_number_is_rejected() {
        let env = |key: &str| (key == "HUEMIX_LEFT_COUNT").then(|| "seven".to_string());
        let err = resolve_with(&HuemixConfig::default(), &CliOverrides::default(), Path::new("."), env)
            .unwrap_err();
        assert!(err.to_string().contains("HUEMIX_LEFT_COUNT"));
    }

    #[test]
    fn test_tiny_tiles_and_zero_frame_rate_are_rejected() {
        let mut config = HuemixConfig::default();
        config.board.tile_px = Some(2);
        assert!(matches!(
            resolve_with(&config, &CliOverrides::default(), Path::new("."), no_env),
            Err(ConfigError::Invalid(_))
        ));

        let mut config = HuemixConfig::default();
        config.round.frame_rate = Some(0);
        assert!(matches!(
            resolve_with(&config, &CliOverrides::default(), Path::new("."), no_env),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_frame_rate_is_capped() {
        let mut config = HuemixConfig::default();
        config.round.frame_rate = Some(u32::MAX);
        let err = resolve_with(&config, &CliOverrides::default(), Path::new("."), no_env).unwrap_err();
        assert!(err.to_string().contains("frame_rate"));

        config.round.frame_rate = Some(MAX_FRAME_RATE);
        let resolved = resolve_plain(&config, &CliOverrides::default());
        assert!(resolved.frame_interval() > Duration::ZERO);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[board]
left_count = 5
right_count = 6

[round]
reset_delay_ms = 2000

[audio]
muted = true
win_sound = "fanfare.ogg"
"#;
        let config: HuemixConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.left_count, Some(5));
        assert_eq!(config.board.right_count, Some(6));
        assert_eq!(config.round.reset_delay_ms, Some(2000));
        assert_eq!(config.audio.muted, Some(true));
        assert_eq!(config.audio.win_sound.as_deref(), Some("fanfare.ogg"));
        assert!(config.audio.lose_sound.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[round]
frame_rate = 24
"#;
        let config: HuemixConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.round.frame_rate, Some(24));
        assert!(config.board.tile_px.is_none());
        assert!(config.audio.move_sound.is_none());
    }

    #[test]
    fn test_generated_default_config_is_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_default_config(&path);
        let config = load_config_from(&path).unwrap();
        assert!(config.board.left_count.is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[board]\nleft_count = \"many\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
