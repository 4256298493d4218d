/// Configuration for mounting weft nodes into the browser DOM.
///
/// # Example
///
/// ```rust, ignore
/// weft_web::mount_with_config(app(), weft_web::Config::new().rootname("app").replace(true))
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) rootname: String,
    pub(crate) replace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rootname: "main".to_string(),
            replace: false,
        }
    }
}

impl Config {
    /// Create a new Default instance of the Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id of the element that rendered nodes are appended to.
    pub fn rootname(mut self, name: impl Into<String>) -> Self {
        self.rootname = name.into();
        self
    }

    /// Clear the root's existing content before mounting instead of appending after it.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }
}
