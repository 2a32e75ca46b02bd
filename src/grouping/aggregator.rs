use crate::classifier::determine_room_count;
use crate::dataset::{Dataset, DatasetError, UnitRecord};
use crate::grouping::models::*;
use tracing::{debug, info, warn};

/// Group a loaded dataset by project.
///
/// Fails with [`DatasetError::Schema`] before touching any row when the
/// `Project` or `Unit Type` column is absent.
pub fn group_by_project(dataset: &Dataset) -> Result<ProjectGroups, DatasetError> {
    dataset.validate_schema()?;

    let groups = group_records(&dataset.records);
    info!(summary = %groups.summary(), "grouped dataset");

    Ok(groups)
}

/// Group records without a header check.
///
/// Every record lands in its project's list; a unit type already listed for
/// that project (exact, case-sensitive match) is skipped.
pub fn group_records<'a, I>(records: I) -> ProjectGroups
where
    I: IntoIterator<Item = &'a UnitRecord>,
{
    let mut groups = ProjectGroups::new();

    for (row, record) in records.into_iter().enumerate() {
        let project = match record.project.as_deref() {
            Some(project) => project,
            None => {
                warn!(row, "missing project, grouping under '{}'", MISSING_PROJECT);
                MISSING_PROJECT
            }
        };

        let room_count = determine_room_count(record.unit_type());
        let group = groups.entry(project);

        if group.contains(record.unit_type()) {
            debug!(row, project, unit_type = ?record.unit_type, "duplicate unit type skipped");
            continue;
        }

        group.units.push(UnitPair {
            unit_type: record.unit_type.clone(),
            room_count,
        });
    }

    groups
}
