//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
justicia - estudio del Sistema Penal Acusatorio en la terminal

USAGE:
    justicia [OPTIONS]

OPTIONS:
    --model <name>      Modelo de Gemini (por defecto gemini-2.5-flash)
    --log-file <path>   Archivo de registro
    -V, --version       Muestra la versión
    -h, --help          Muestra esta ayuda

ENVIRONMENT:
    GEMINI_API_KEY      Clave de la API de Gemini (también API_KEY)
    JUSTICIA_MODEL      Modelo por defecto
    GEMINI_BASE_URL     Raíz de la API
    JUSTICIA_CONNECT_TIMEOUT
                        Tiempo de conexión en segundos
    JUSTICIA_LOG_FILE   Archivo de registro
    RUST_LOG            Filtro de registro (por defecto justicia=info)
";

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("justicia {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    print!("{}", USAGE);
    std::process::exit(0)
}
