//! Instance text format.
//!
//! ```text
//! PREPARATION_AREA
//! 0 0
//! ENCLOSURE_LOCATIONS
//! 3 4
//! 6 8
//! EOF
//! ```
//!
//! Lines before `PREPARATION_AREA` are ignored, as are blank lines. The
//! depot section holds exactly one `x y` line; every line of the locations
//! section is one visitable location, numbered from 0 in file order.
//! Reading stops at `EOF` or at the end of input.

use std::path::Path;

use crate::error::{HyperHeuristicError, Result};
use crate::models::{Instance, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Depot,
    Locations,
}

/// Parses an instance from its text form.
///
/// # Examples
///
/// ```
/// use u_hyperheur::io::parse_instance;
///
/// let text = "PREPARATION_AREA\n0 0\nENCLOSURE_LOCATIONS\n3 4\n6 8\nEOF\n";
/// let instance = parse_instance(text).unwrap();
/// assert_eq!(instance.num_locations(), 2);
/// assert_eq!(instance.cost_to_depot(1), 10);
/// ```
pub fn parse_instance(content: &str) -> Result<Instance> {
    let mut section = Section::Header;
    let mut depot: Option<Location> = None;
    let mut locations: Vec<Location> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        let line_no = line_num + 1;

        if line.starts_with("PREPARATION_AREA") {
            section = Section::Depot;
            continue;
        }
        if line.starts_with("ENCLOSURE_LOCATIONS") {
            section = Section::Locations;
            continue;
        }
        if line.starts_with("EOF") {
            break;
        }
        if line.is_empty() || section == Section::Header {
            continue;
        }

        let (x, y) = parse_coordinates(line, line_no)?;
        match section {
            Section::Depot => {
                if depot.is_some() {
                    return Err(HyperHeuristicError::Parse {
                        line: line_no,
                        cause: "more than one preparation area".into(),
                    });
                }
                depot = Some(Location::depot(x, y));
            }
            Section::Locations => locations.push(Location::new(locations.len(), x, y)),
            Section::Header => {}
        }
    }

    let depot = depot.ok_or(HyperHeuristicError::MissingDepot)?;
    Instance::new(depot, locations)
}

/// Reads and parses an instance file.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Instance> {
    let content = std::fs::read_to_string(path)?;
    parse_instance(&content)
}

fn parse_coordinates(line: &str, line_no: usize) -> Result<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let mut next = |axis: &str| -> Result<i32> {
        let token = parts.next().ok_or_else(|| HyperHeuristicError::Parse {
            line: line_no,
            cause: format!("missing {axis} coordinate"),
        })?;
        token.parse().map_err(|_| HyperHeuristicError::Parse {
            line: line_no,
            cause: format!("invalid {axis} coordinate: {token}"),
        })
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}
