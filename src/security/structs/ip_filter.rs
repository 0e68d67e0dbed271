#[derive(Debug, Clone, Default)]
pub struct IpFilter {
    pub(crate) allow: Vec<String>,
    pub(crate) deny: Vec<String>,
}
