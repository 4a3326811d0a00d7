//! Content catalog
//!
//! This module holds the static offline catalog: categories, the programs in
//! them, weekly instructions for each program, and the daily content of each
//! instruction. The catalog is validated once when it is loaded and is
//! read-only afterwards; every query is total and returns `None` or an empty
//! sequence for identifiers that match nothing.

use app_ui::parse_hex_color;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Bundled catalog dataset
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Category identifier
pub type CategoryId = u32;
/// Program identifier
pub type ProgramId = u32;
/// Instruction identifier
pub type InstructionId = u32;

/// Reserved category id meaning "no filter"
pub const ALL_CATEGORY_ID: CategoryId = 1;

/// Display name of the reserved category
pub const ALL_CATEGORY_NAME: &str = "All";

/// Integrity faults detected while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Dataset is not valid JSON or does not match the schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An authored category uses the reserved "All" id
    #[error("Category id {id} is reserved for \"All\" but is used by {name:?}")]
    ReservedCategoryId {
        /// Offending id
        id: CategoryId,
        /// Name of the authored category
        name: String,
    },

    /// Two records of the same kind share an id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId {
        /// Kind of record
        entity: &'static str,
        /// Repeated id
        id: u32,
    },

    /// A program points at a category that does not exist
    #[error("Program {program_id} references unknown category {category_id}")]
    UnknownCategory {
        /// Program holding the reference
        program_id: ProgramId,
        /// Missing category
        category_id: CategoryId,
    },

    /// An instruction points at a program that does not exist
    #[error("Instruction {instruction_id} references unknown program {program_id}")]
    UnknownProgram {
        /// Instruction holding the reference
        instruction_id: InstructionId,
        /// Missing program
        program_id: ProgramId,
    },

    /// Week numbers start at 1
    #[error("Instruction {instruction_id} has invalid week 0")]
    InvalidWeek {
        /// Offending instruction
        instruction_id: InstructionId,
    },

    /// Equipment color is not a hex color value
    #[error("Equipment {equipment_id} of program {program_id} has invalid color {color:?}")]
    InvalidColor {
        /// Program owning the equipment
        program_id: ProgramId,
        /// Offending equipment
        equipment_id: u32,
        /// Authored color
        color: String,
    },

    /// Day numbers start at 1
    #[error("Content {content_id} of instruction {instruction_id} has invalid day 0")]
    InvalidDay {
        /// Instruction owning the content
        instruction_id: InstructionId,
        /// Offending content
        content_id: u32,
    },
}

/// Result type for catalog loading
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Program category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable id
    pub id: CategoryId,
    /// Display name
    pub name: String,
}

impl Category {
    /// The reserved "All" entry
    pub fn all() -> Self {
        Self { id: ALL_CATEGORY_ID, name: ALL_CATEGORY_NAME.to_string() }
    }

    /// Check if this is the reserved "All" entry
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

/// Equipment a program needs; owned by its program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Id, unique within the owning program
    pub id: u32,
    /// Display name
    pub name: String,
    /// Icon asset reference
    pub icon_ref: String,
    /// Hex color used for the equipment chip
    pub display_color: String,
}

/// A training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique id
    pub id: ProgramId,
    /// Owning category
    pub category_id: CategoryId,
    /// Title
    pub title: String,
    /// Human-readable duration (e.g. "4 minggu")
    pub duration_label: String,
    /// Cover image asset reference
    pub image_ref: String,
    /// Description
    pub description: String,
    /// Only available to premium members
    #[serde(default)]
    pub is_exclusive: bool,
    /// Shown as followed for new users
    #[serde(default)]
    pub is_followed_by_default: bool,
    /// Equipment, in display order
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

/// Content for one day of an instruction week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionContent {
    /// Id, unique within the owning instruction
    pub id: u32,
    /// Day number, starting at 1
    pub day: u32,
    /// Title
    pub title: String,
    /// Steps, in order
    #[serde(default)]
    pub steps: Vec<String>,
}

/// One week of a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    /// Unique id
    pub id: InstructionId,
    /// Owning program
    pub program_id: ProgramId,
    /// Week number, starting at 1; need not be contiguous
    pub week: u32,
    /// Title
    pub title: String,
    /// Subtitle
    pub subtitle: String,
    /// Whether the week has been completed
    #[serde(default)]
    pub is_complete: bool,
    /// Daily content, in order
    #[serde(default)]
    pub content: Vec<InstructionContent>,
}

/// Completion summary for a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramProgress {
    /// Weeks marked complete
    pub completed_weeks: usize,
    /// All weeks in the program
    pub total_weeks: usize,
}

impl ProgramProgress {
    /// Completed share in `0.0..=1.0`; zero for a program without weeks
    pub fn fraction(&self) -> f32 {
        if self.total_weeks == 0 {
            0.0
        } else {
            self.completed_weeks as f32 / self.total_weeks as f32
        }
    }

    /// Check if every week is complete
    pub fn is_complete(&self) -> bool {
        self.total_weeks > 0 && self.completed_weeks == self.total_weeks
    }
}

/// Authored dataset as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Categories in authoring order
    pub categories: Vec<Category>,
    /// Programs in catalog order
    pub programs: Vec<Program>,
    /// Instructions in authoring order
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

/// Programs in `category_id`, preserving order.
///
/// [`ALL_CATEGORY_ID`] selects every program; an id no program uses yields an
/// empty result.
pub fn programs_in_category(programs: &[Program], category_id: CategoryId) -> Vec<&Program> {
    programs
        .iter()
        .filter(|program| category_id == ALL_CATEGORY_ID || program.category_id == category_id)
        .collect()
}

/// Validated, read-only content catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    programs: Vec<Program>,
    instructions: Vec<Instruction>,
    category_index: HashMap<CategoryId, usize>,
    program_index: HashMap<ProgramId, usize>,
    instruction_index: HashMap<InstructionId, usize>,
}

impl Catalog {
    /// Build a catalog, checking every integrity rule.
    ///
    /// The reserved "All" category is always listed first. An authored entry
    /// with the reserved id is accepted only if it is named "All".
    pub fn new(
        categories: Vec<Category>,
        programs: Vec<Program>,
        instructions: Vec<Instruction>,
    ) -> Result<Self> {
        let mut all_categories = vec![Category::all()];
        for category in categories {
            if category.is_all() {
                if category.name.eq_ignore_ascii_case(ALL_CATEGORY_NAME) {
                    continue;
                }
                return Err(CatalogError::ReservedCategoryId {
                    id: category.id,
                    name: category.name,
                });
            }
            all_categories.push(category);
        }

        let category_index = index_by(&all_categories, "category", |c| c.id)?;
        let program_index = index_by(&programs, "program", |p| p.id)?;
        let instruction_index = index_by(&instructions, "instruction", |i| i.id)?;

        for program in &programs {
            if program.category_id == ALL_CATEGORY_ID
                || !category_index.contains_key(&program.category_id)
            {
                return Err(CatalogError::UnknownCategory {
                    program_id: program.id,
                    category_id: program.category_id,
                });
            }
            index_by(&program.equipment, "equipment", |e| e.id)?;
            if let Some(equipment) =
                program.equipment.iter().find(|e| parse_hex_color(&e.display_color).is_none())
            {
                return Err(CatalogError::InvalidColor {
                    program_id: program.id,
                    equipment_id: equipment.id,
                    color: equipment.display_color.clone(),
                });
            }
        }

        for instruction in &instructions {
            if !program_index.contains_key(&instruction.program_id) {
                return Err(CatalogError::UnknownProgram {
                    instruction_id: instruction.id,
                    program_id: instruction.program_id,
                });
            }
            if instruction.week == 0 {
                return Err(CatalogError::InvalidWeek { instruction_id: instruction.id });
            }
            index_by(&instruction.content, "instruction content", |c| c.id)?;
            if let Some(content) = instruction.content.iter().find(|c| c.day == 0) {
                return Err(CatalogError::InvalidDay {
                    instruction_id: instruction.id,
                    content_id: content.id,
                });
            }
        }

        tracing::info!(
            categories = all_categories.len(),
            programs = programs.len(),
            instructions = instructions.len(),
            "Catalog loaded"
        );

        Ok(Self {
            categories: all_categories,
            programs,
            instructions,
            category_index,
            program_index,
            instruction_index,
        })
    }

    /// Build a catalog from an authored dataset
    pub fn from_data(data: CatalogData) -> Result<Self> {
        Self::new(data.categories, data.programs, data.instructions)
    }

    /// Parse and validate a camelCase JSON dataset
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// The dataset bundled with the app
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All categories in authoring order, "All" first
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    /// All programs in catalog order
    pub fn list_programs(&self) -> &[Program] {
        &self.programs
    }

    /// Programs in a category, in catalog order; every program for "All"
    pub fn list_programs_by_category(&self, category_id: CategoryId) -> Vec<&Program> {
        if !self.category_index.contains_key(&category_id) {
            tracing::debug!(category_id, "Program filter for unknown category");
        }
        programs_in_category(&self.programs, category_id)
    }

    /// Look up a program by id
    pub fn get_program(&self, id: ProgramId) -> Option<&Program> {
        self.program_index.get(&id).map(|&i| &self.programs[i])
    }

    /// Programs new users follow by default, in catalog order
    pub fn list_followed_programs(&self) -> Vec<&Program> {
        self.programs.iter().filter(|p| p.is_followed_by_default).collect()
    }

    /// Case-insensitive match against program titles and descriptions
    pub fn search_programs(&self, query: &str) -> Vec<&Program> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.programs
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Instructions of a program ordered by week; authored order breaks ties
    pub fn list_instructions_by_program(&self, program_id: ProgramId) -> Vec<&Instruction> {
        if !self.program_index.contains_key(&program_id) {
            tracing::debug!(program_id, "Instruction listing for unknown program");
            return Vec::new();
        }

        let mut instructions: Vec<&Instruction> = self
            .instructions
            .iter()
            .filter(|i| i.program_id == program_id)
            .collect();
        instructions.sort_by_key(|i| i.week);
        instructions
    }

    /// Look up an instruction by id
    pub fn get_instruction(&self, id: InstructionId) -> Option<&Instruction> {
        self.instruction_index.get(&id).map(|&i| &self.instructions[i])
    }

    /// Content of an instruction for a given day
    pub fn get_instruction_content(
        &self,
        instruction_id: InstructionId,
        day: u32,
    ) -> Option<&InstructionContent> {
        self.get_instruction(instruction_id)?
            .content
            .iter()
            .find(|c| c.day == day)
    }

    /// Completed weeks of a program; `None` for an unknown program
    pub fn program_progress(&self, program_id: ProgramId) -> Option<ProgramProgress> {
        self.get_program(program_id)?;

        let weeks = self.list_instructions_by_program(program_id);
        Some(ProgramProgress {
            completed_weeks: weeks.iter().filter(|i| i.is_complete).count(),
            total_weeks: weeks.len(),
        })
    }
}

fn index_by<T>(
    items: &[T],
    entity: &'static str,
    id_of: impl Fn(&T) -> u32,
) -> Result<HashMap<u32, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    let mut seen = HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = id_of(item);
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { entity, id });
        }
        index.insert(id, position);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: CategoryId, name: &str) -> Category {
        Category { id, name: name.to_string() }
    }

    fn program(id: ProgramId, category_id: CategoryId) -> Program {
        Program {
            id,
            category_id,
            title: format!("Program {}", id),
            duration_label: "1 minggu".to_string(),
            image_ref: format!("programs/{}.png", id),
            description: String::new(),
            is_exclusive: false,
            is_followed_by_default: false,
            equipment: Vec::new(),
        }
    }

    fn instruction(id: InstructionId, program_id: ProgramId, week: u32) -> Instruction {
        Instruction {
            id,
            program_id,
            week,
            title: format!("Minggu {}", week),
            subtitle: String::new(),
            is_complete: false,
            content: vec![InstructionContent {
                id: 1,
                day: 1,
                title: "Hari 1".to_string(),
                steps: vec!["Pemanasan".to_string()],
            }],
        }
    }

    fn ids(programs: &[&Program]) -> Vec<ProgramId> {
        programs.iter().map(|p| p.id).collect()
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![category(2, "Fokus"), category(3, "Kebugaran"), category(4, "Tidur")],
            vec![program(1, 3), program(2, 4), program(3, 2)],
            vec![
                instruction(1, 1, 3),
                instruction(2, 1, 1),
                instruction(3, 2, 1),
                instruction(4, 1, 2),
            ],
        )
        .unwrap()
    }

    // ==========================================================================
    // Category filter
    // ==========================================================================

    #[test]
    fn test_programs_in_category_scenario() {
        let programs = vec![program(1, 3), program(2, 4), program(3, 2)];

        assert_eq!(ids(&programs_in_category(&programs, ALL_CATEGORY_ID)), vec![1, 2, 3]);
        assert_eq!(ids(&programs_in_category(&programs, 4)), vec![2]);
        assert!(programs_in_category(&programs, 99).is_empty());
    }

    #[test]
    fn test_list_programs_by_category() {
        let catalog = sample();

        assert_eq!(ids(&catalog.list_programs_by_category(ALL_CATEGORY_ID)), vec![1, 2, 3]);
        assert_eq!(ids(&catalog.list_programs_by_category(3)), vec![1]);
        assert_eq!(ids(&catalog.list_programs_by_category(4)), vec![2]);
        assert!(catalog.list_programs_by_category(99).is_empty());
    }

    #[test]
    fn test_all_filter_is_union_of_real_categories() {
        let catalog = sample();
        let all = catalog.list_programs_by_category(ALL_CATEGORY_ID);

        let per_category: usize = catalog
            .list_categories()
            .iter()
            .filter(|c| !c.is_all())
            .map(|c| catalog.list_programs_by_category(c.id).len())
            .sum();
        assert_eq!(all.len(), per_category);

        let unique: HashSet<ProgramId> = all.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), all.len());
    }

    // ==========================================================================
    // Lookups
    // ==========================================================================

    #[test]
    fn test_categories_listed_with_all_first() {
        let catalog = sample();
        let names: Vec<&str> = catalog.list_categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["All", "Fokus", "Kebugaran", "Tidur"]);
    }

    #[test]
    fn test_authored_all_entry_is_not_duplicated() {
        let catalog = Catalog::new(
            vec![category(1, "All"), category(2, "Fokus")],
            vec![program(1, 2)],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(catalog.list_categories().len(), 2);
        assert!(catalog.list_categories()[0].is_all());
    }

    #[test]
    fn test_get_category_and_program() {
        let catalog = sample();

        assert_eq!(catalog.get_category(2).map(|c| c.name.as_str()), Some("Fokus"));
        assert_eq!(catalog.get_category(ALL_CATEGORY_ID), Some(&Category::all()));
        assert!(catalog.get_category(42).is_none());

        assert_eq!(catalog.get_program(3).map(|p| p.category_id), Some(2));
        assert!(catalog.get_program(42).is_none());
    }

    #[test]
    fn test_instructions_sorted_by_week() {
        let catalog = sample();
        let weeks: Vec<u32> = catalog.list_instructions_by_program(1).iter().map(|i| i.week).collect();
        assert_eq!(weeks, vec![1, 2, 3]);

        assert!(catalog.list_instructions_by_program(3).is_empty());
        assert!(catalog.list_instructions_by_program(99).is_empty());
    }

    #[test]
    fn test_equal_weeks_keep_authored_order() {
        let catalog = Catalog::new(
            vec![category(2, "Fokus")],
            vec![program(1, 2)],
            vec![instruction(7, 1, 2), instruction(5, 1, 1), instruction(6, 1, 2)],
        )
        .unwrap();

        let order: Vec<InstructionId> =
            catalog.list_instructions_by_program(1).iter().map(|i| i.id).collect();
        assert_eq!(order, vec![5, 7, 6]);
    }

    #[test]
    fn test_instruction_content_by_day() {
        let catalog = sample();

        let content = catalog.get_instruction_content(2, 1).unwrap();
        assert_eq!(content.steps, vec!["Pemanasan".to_string()]);
        assert!(catalog.get_instruction_content(2, 5).is_none());
        assert!(catalog.get_instruction_content(99, 1).is_none());
    }

    #[test]
    fn test_program_progress() {
        let mut weeks = vec![instruction(1, 1, 1), instruction(2, 1, 2)];
        weeks[0].is_complete = true;
        let catalog =
            Catalog::new(vec![category(2, "Fokus")], vec![program(1, 2), program(2, 2)], weeks)
                .unwrap();

        let progress = catalog.program_progress(1).unwrap();
        assert_eq!(progress, ProgramProgress { completed_weeks: 1, total_weeks: 2 });
        assert_eq!(progress.fraction(), 0.5);
        assert!(!progress.is_complete());

        let empty = catalog.program_progress(2).unwrap();
        assert_eq!(empty.fraction(), 0.0);
        assert!(!empty.is_complete());

        assert!(catalog.program_progress(99).is_none());
    }

    #[test]
    fn test_search_and_followed_programs() {
        let mut followed = program(1, 2);
        followed.title = "Meditasi Pagi".to_string();
        followed.is_followed_by_default = true;
        let mut other = program(2, 2);
        other.description = "Pernapasan untuk meditasi".to_string();

        let catalog = Catalog::new(vec![category(2, "Fokus")], vec![followed, other], Vec::new())
            .unwrap();

        assert_eq!(ids(&catalog.search_programs("MEDITASI")), vec![1, 2]);
        assert_eq!(ids(&catalog.search_programs("pagi")), vec![1]);
        assert!(catalog.search_programs("   ").is_empty());
        assert_eq!(ids(&catalog.list_followed_programs()), vec![1]);
    }

    // ==========================================================================
    // Integrity faults
    // ==========================================================================

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Catalog::new(
            vec![category(2, "Fokus"), category(3, "Kebugaran")],
            vec![program(1, 3), program(2, 4), program(3, 2)],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnknownCategory { program_id: 2, category_id: 4 })
        ));
    }

    #[test]
    fn test_program_in_all_category_is_rejected() {
        let result = Catalog::new(vec![category(2, "Fokus")], vec![program(1, 1)], Vec::new());
        assert!(matches!(result, Err(CatalogError::UnknownCategory { category_id: 1, .. })));
    }

    #[test]
    fn test_unknown_program_is_rejected() {
        let result = Catalog::new(
            vec![category(2, "Fokus")],
            vec![program(1, 2)],
            vec![instruction(1, 9, 1)],
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnknownProgram { instruction_id: 1, program_id: 9 })
        ));
    }

    #[test]
    fn test_reserved_category_id_is_rejected() {
        let result = Catalog::new(vec![category(1, "Fokus")], Vec::new(), Vec::new());
        assert!(matches!(result, Err(CatalogError::ReservedCategoryId { id: 1, .. })));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(
            vec![category(2, "Fokus"), category(2, "Tidur")],
            Vec::new(),
            Vec::new(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { entity: "category", id: 2 })));

        let result = Catalog::new(
            vec![category(2, "Fokus")],
            vec![program(1, 2), program(1, 2)],
            Vec::new(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { entity: "program", id: 1 })));
    }

    #[test]
    fn test_equipment_ids_scoped_to_program() {
        let chip = |id| Equipment {
            id,
            name: "Matras".to_string(),
            icon_ref: "icons/mat.svg".to_string(),
            display_color: "#1B998B".to_string(),
        };
        let mut first = program(1, 2);
        first.equipment = vec![chip(1)];
        let mut second = program(2, 2);
        second.equipment = vec![chip(1)];
        assert!(Catalog::new(vec![category(2, "Fokus")], vec![first.clone(), second], Vec::new())
            .is_ok());

        first.equipment.push(chip(1));
        let result = Catalog::new(vec![category(2, "Fokus")], vec![first], Vec::new());
        assert!(matches!(result, Err(CatalogError::DuplicateId { entity: "equipment", id: 1 })));
    }

    #[test]
    fn test_invalid_equipment_color_is_rejected() {
        let mut mat = program(1, 2);
        mat.equipment = vec![Equipment {
            id: 3,
            name: "Matras".to_string(),
            icon_ref: "icons/mat.svg".to_string(),
            display_color: "teal".to_string(),
        }];

        let result = Catalog::new(vec![category(2, "Fokus")], vec![mat], Vec::new());
        assert!(matches!(
            result,
            Err(CatalogError::InvalidColor { program_id: 1, equipment_id: 3, ref color }) if color == "teal"
        ));
    }

    #[test]
    fn test_zero_week_and_day_are_rejected() {
        let result = Catalog::new(
            vec![category(2, "Fokus")],
            vec![program(1, 2)],
            vec![instruction(1, 1, 0)],
        );
        assert!(matches!(result, Err(CatalogError::InvalidWeek { instruction_id: 1 })));

        let mut bad_day = instruction(2, 1, 1);
        bad_day.content[0].day = 0;
        let result = Catalog::new(vec![category(2, "Fokus")], vec![program(1, 2)], vec![bad_day]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidDay { instruction_id: 2, content_id: 1 })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r##"{
            "categories": [{ "id": 2, "name": "Fokus" }],
            "programs": [{
                "id": 10,
                "categoryId": 2,
                "title": "Pernapasan",
                "durationLabel": "1 minggu",
                "imageRef": "programs/breath.png",
                "description": "Latihan napas",
                "isExclusive": true,
                "equipment": [
                    { "id": 1, "name": "Bantal", "iconRef": "icons/pillow.svg", "displayColor": "#FFFFFF" }
                ]
            }],
            "instructions": [{
                "id": 1, "programId": 10, "week": 1, "title": "Minggu 1", "subtitle": "Dasar",
                "content": [{ "id": 1, "day": 1, "title": "Hari 1", "steps": ["Tarik napas"] }]
            }]
        }"##;

        let catalog = Catalog::from_json(json).unwrap();
        let program = catalog.get_program(10).unwrap();
        assert!(program.is_exclusive);
        assert!(!program.is_followed_by_default);
        assert_eq!(program.equipment[0].icon_ref, "icons/pillow.svg");
        assert!(!catalog.get_instruction(1).unwrap().is_complete);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(Catalog::from_json("{ not json"), Err(CatalogError::Parse(_))));
    }

    // ==========================================================================
    // Bundled dataset
    // ==========================================================================

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.list_categories()[0].is_all());
        assert!(catalog.list_categories().len() > 1);
        assert!(!catalog.list_programs().is_empty());
    }

    #[test]
    fn test_builtin_catalog_references_resolve() {
        let catalog = Catalog::builtin().unwrap();

        for program in catalog.list_programs() {
            assert!(catalog.get_category(program.category_id).is_some());
            for instruction in catalog.list_instructions_by_program(program.id) {
                assert!(catalog.get_program(instruction.program_id).is_some());
                assert!(instruction.week > 0);
            }
        }
    }

    #[test]
    fn test_builtin_weeks_sorted_despite_authoring_order() {
        let catalog = Catalog::builtin().unwrap();
        for program in catalog.list_programs() {
            let weeks: Vec<u32> =
                catalog.list_instructions_by_program(program.id).iter().map(|i| i.week).collect();
            let mut sorted = weeks.clone();
            sorted.sort_unstable();
            assert_eq!(weeks, sorted, "weeks out of order for program {}", program.id);
        }
    }
}
