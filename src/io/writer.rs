//! Route consumers.

use std::io::Write;

use crate::error::Result;
use crate::models::Location;

/// Receives a resolved route: the depot, every location in visiting order,
/// and the depot again.
pub trait ResultSink {
    /// Consumes one route.
    fn write_route(&mut self, route: &[Location]) -> Result<()>;
}

/// Writes one `x,y` line per route stop.
///
/// # Examples
///
/// ```
/// use u_hyperheur::io::{CsvSink, ResultSink};
/// use u_hyperheur::models::Location;
///
/// let route = [Location::depot(0, 0), Location::new(0, 3, 4), Location::depot(0, 0)];
/// let mut sink = CsvSink::new(Vec::new());
/// sink.write_route(&route).unwrap();
/// assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "0,0\n3,4\n0,0\n");
/// ```
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn write_route(&mut self, route: &[Location]) -> Result<()> {
        for location in route {
            writeln!(self.writer, "{},{}", location.x(), location.y())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every route it receives.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    routes: Vec<Vec<Location>>,
}

impl VecSink {
    /// Routes received so far, oldest first.
    pub fn routes(&self) -> &[Vec<Location>] {
        &self.routes
    }
}

impl ResultSink for VecSink {
    fn write_route(&mut self, route: &[Location]) -> Result<()> {
        self.routes.push(route.to_vec());
        Ok(())
    }
}
