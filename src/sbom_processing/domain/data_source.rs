/// Where the SBOM behind a notice came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the remote SCA/SBOM service
    Remote,
    /// Read from a local SBOM file
    Local,
}

impl DataSource {
    /// Label printed on the notice's `DATA SOURCE:` line
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Remote => "remote SCA/SBOM service",
            DataSource::Local => "local SBOM file",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
