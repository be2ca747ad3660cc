#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendTarget {
    Map,
    Sql,
}
