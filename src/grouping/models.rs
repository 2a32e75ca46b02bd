use crate::classifier::RoomCount;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Key used for rows whose project cell was missing
pub const MISSING_PROJECT: &str = "NaN";

/// One `(unitType, roomCount)` entry; serialized as a two-element array.
/// `unit_type` is the raw label, untouched by classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(Option<String>, RoomCount)",
    into = "(Option<String>, RoomCount)"
)]
pub struct UnitPair {
    pub unit_type: Option<String>,
    pub room_count: RoomCount,
}

impl From<(Option<String>, RoomCount)> for UnitPair {
    fn from((unit_type, room_count): (Option<String>, RoomCount)) -> Self {
        Self {
            unit_type,
            room_count,
        }
    }
}

impl From<UnitPair> for (Option<String>, RoomCount) {
    fn from(pair: UnitPair) -> Self {
        (pair.unit_type, pair.room_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    pub project: String,
    pub units: Vec<UnitPair>,
}

impl ProjectGroup {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            units: Vec::new(),
        }
    }

    /// Exact, case-sensitive comparison on the raw label
    pub fn contains(&self, unit_type: Option<&str>) -> bool {
        self.units.iter().any(|u| u.unit_type.as_deref() == unit_type)
    }
}

/// Project name -> distinct unit pairs, both levels in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectGroups {
    groups: Vec<ProjectGroup>,
    index: HashMap<String, usize>,
}

impl ProjectGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group for `project`, created empty at the end if new
    pub fn entry(&mut self, project: &str) -> &mut ProjectGroup {
        let idx = match self.index.get(project) {
            Some(&idx) => idx,
            None => {
                self.groups.push(ProjectGroup::new(project));
                let idx = self.groups.len() - 1;
                self.index.insert(project.to_string(), idx);
                idx
            }
        };
        &mut self.groups[idx]
    }

    pub fn get(&self, project: &str) -> Option<&ProjectGroup> {
        self.index.get(project).map(|&idx| &self.groups[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectGroup> {
        self.groups.iter()
    }

    pub fn projects(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.project.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn summary(&self) -> GroupingSummary {
        let pairs = self.groups.iter().map(|g| g.units.len()).sum();
        let unknown = self
            .groups
            .iter()
            .flat_map(|g| &g.units)
            .filter(|u| u.room_count.is_unknown())
            .count();

        GroupingSummary {
            projects: self.groups.len(),
            pairs,
            unknown,
        }
    }
}

impl<'a> IntoIterator for &'a ProjectGroups {
    type Item = &'a ProjectGroup;
    type IntoIter = std::slice::Iter<'a, ProjectGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serialized as a JSON object; key order follows `groups`
impl Serialize for ProjectGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.project, &group.units)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProjectGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = ProjectGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of project name to [unitType, roomCount] pairs")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut groups = ProjectGroups::new();
                while let Some((project, units)) = access.next_entry::<String, Vec<UnitPair>>()? {
                    if groups.get(&project).is_some() {
                        return Err(de::Error::custom(format!(
                            "duplicate project '{}'",
                            project
                        )));
                    }

                    let group = groups.entry(&project);
                    for unit in units {
                        if group.contains(unit.unit_type.as_deref()) {
                            return Err(de::Error::custom(format!(
                                "duplicate unit type {:?} in project '{}'",
                                unit.unit_type, project
                            )));
                        }
                        group.units.push(unit);
                    }
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingSummary {
    pub projects: usize,
    pub pairs: usize,
    pub unknown: usize,
}

impl fmt::Display for GroupingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} projects, {} unit types ({} unknown)",
            self.projects, self.pairs, self.unknown
        )
    }
}
