use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::map_db::map_db::MAX_SHARD_DEPTH;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            storage: StorageConfig::default(),
            database: DatabaseConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => { c }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => { data }
                    Err(e) => { return Err(CustomError::new(&ConfigurationError::SerializeError(e).to_string())); }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("{error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Err(error) = parse_log_level(self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(error.to_string()));
        }

        let check_buffers = [
            ("storage.request_buffer", self.storage.request_buffer),
            ("storage.map_buffer", self.storage.map_buffer),
            ("storage.sql_buffer", self.storage.sql_buffer),
        ];
        for (name, value) in check_buffers {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be at least 1")));
            }
        }

        let depth = self.storage.shard_depth();
        if depth > MAX_SHARD_DEPTH {
            return Err(ConfigurationError::ValidationError(format!(
                "storage.capacity {} needs a trie depth of {depth}, maximum is {MAX_SHARD_DEPTH}",
                self.storage.capacity
            )));
        }

        if self.storage.sql_enabled && self.database.path.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("database.path is empty while storage.sql_enabled is set")));
        }

        Ok(())
    }
}
