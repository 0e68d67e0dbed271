/// The four BEP 15 actions. Anything else on the wire is rejected.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Action {
    Connect = 0,
    Announce = 1,
    Scrape = 2,
    Error = 3,
}
