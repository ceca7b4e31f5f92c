//! Static schema knowledge about the warehouse sensor table: column names,
//! which of them a snapshot must carry, and the fixed table projection.

/// Warehouse column names. The warehouse reports them uppercase and the crate
/// never renames them, so string constants are the whole schema story.
pub mod columns {
    pub const SYSTEMTIME: &str = "SYSTEMTIME";
    pub const HOSTNAME: &str = "HOSTNAME";
    pub const IPADDRESS: &str = "IPADDRESS";
    pub const TEMPERATURE: &str = "TEMPERATURE";
    pub const HUMIDITY: &str = "HUMIDITY";
    pub const PRESSURE: &str = "PRESSURE";
    pub const DEWPOINT: &str = "DEWPOINT";
    pub const LUX: &str = "LUX";
    pub const CPU: &str = "CPU";
    pub const MEMORY: &str = "MEMORY";
    pub const CPUTEMPF: &str = "CPUTEMPF";
    pub const DEVICETEMPERATURE: &str = "DEVICETEMPERATURE";
}

/// Table queried when the caller does not configure one.
pub const DEFAULT_TABLE: &str = "DEMO.DEMO.WEATHER_DATA";

/// Columns a fetched snapshot must contain. `HOSTNAME` is deliberately not in
/// this list: the host filter degrades to a no-op without it. The remaining
/// optional columns only feed charts and the table, which skip what is absent.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    columns::SYSTEMTIME,
    columns::IPADDRESS,
    columns::TEMPERATURE,
    columns::HUMIDITY,
    columns::PRESSURE,
];

/// Fixed projection shown in the data table, in display order. Restricted to
/// the columns actually present at render time.
pub const DISPLAY_COLUMNS: [&str; 11] = [
    columns::SYSTEMTIME,
    columns::HOSTNAME,
    columns::IPADDRESS,
    columns::TEMPERATURE,
    columns::HUMIDITY,
    columns::PRESSURE,
    columns::DEWPOINT,
    columns::LUX,
    columns::CPU,
    columns::MEMORY,
    columns::CPUTEMPF,
];

/// Temperature slider bounds used when the snapshot has no usable values.
pub const DEFAULT_TEMPERATURE_BOUNDS: (f64, f64) = (0.0, 100.0);
