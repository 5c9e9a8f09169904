// Release builds are GUI-subsystem binaries: no console window behind the marker.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        log::error!(
            "marker-dot needs a Win32 desktop; {} is not supported",
            std::env::consts::OS
        );
        std::process::exit(1);
    }
}
