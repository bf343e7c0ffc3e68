// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use thiserror::Error;

/// The marker line that precedes the storage path in `SHOW CREATE TABLE`
/// output.
const LOCATION_MARKER: &str = "LOCATION";

/// Failure to extract a storage location from schema-definition text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("have no location")]
    NotFound,
}

/// Extract the storage path from `SHOW CREATE TABLE` output.
///
/// The warehouse renders the storage clause over two lines: a line whose
/// entire trimmed content is `LOCATION`, followed by a line carrying the path
/// between single quotes:
///
/// ```text
/// ROW FORMAT SERDE
///   'org.apache.hadoop.hive.ql.io.orc.OrcSerde'
/// LOCATION
///   'hdfs://cluster/warehouse/db.db/t'
/// TBLPROPERTIES (
/// ```
///
/// The format is a fixed two-line convention, so this stays a plain text
/// scan rather than a grammar.
///
/// # Arguments
///
/// * `lines` - The schema-definition text, one result row per line
///
/// # Errors
///
/// Fails with [`LocationError::NotFound`] when the marker line is absent,
/// nothing follows it, the following line does not carry two single quotes,
/// or the quoted path is empty.
pub fn parse_location(lines: &[String]) -> Result<String, LocationError> {
    let mut lines = lines.iter();

    while let Some(line) = lines.next() {
        if line.trim() != LOCATION_MARKER {
            continue;
        }

        let path_line = lines.next().ok_or(LocationError::NotFound)?;

        let mut quoted = path_line.split('\'');
        quoted.next();
        let location = quoted.next().ok_or(LocationError::NotFound)?;
        if quoted.next().is_none() {
            // A single quote without its closing partner is malformed input,
            // not a panic
            return Err(LocationError::NotFound);
        }
        if location.is_empty() {
            return Err(LocationError::NotFound);
        }

        return Ok(location.to_string());
    }

    Err(LocationError::NotFound)
}
