pub mod setup_toml;
