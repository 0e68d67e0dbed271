use std::fmt;
use crate::server::structs::running_server::RunningServer;

impl fmt::Debug for RunningServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("RunningServer")
            .field("http_addr", &self.http_addr)
            .field("udp_addr", &self.udp_addr)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}
