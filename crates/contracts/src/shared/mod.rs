pub mod tabs_config;
