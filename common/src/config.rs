#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,

    /// Output reduction level.
    ///
    /// 0 prints everything, 1 drops the banner and section headers,
    /// 2 additionally drops tables and detail trees.
    pub quiet: u8,
}
