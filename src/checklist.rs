//! New pet checklists with progress saved between sessions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("failed to write checklist: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode checklist: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Cat,
    Dog,
}

impl PetType {
    pub fn slug(&self) -> &'static str {
        match self {
            PetType::Cat => "cat",
            PetType::Dog => "dog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PetType::Cat => "Cat",
            PetType::Dog => "Dog",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            PetType::Cat => PetType::Dog,
            PetType::Dog => PetType::Cat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

const fn item(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    cost: &'static str,
) -> ChecklistItem {
    ChecklistItem {
        id,
        label,
        description,
        cost,
    }
}

static CAT_CHECKLIST: &[ChecklistCategory] = &[
    ChecklistCategory {
        id: "essentials",
        title: "Day One Essentials",
        items: &[
            item("food", "Quality cat food", "Age-appropriate wet or dry food", "$15-50"),
            item("bowls", "Food and water bowls", "Preferably stainless steel or ceramic", "$10-20"),
            item("litter-box", "Litter box", "One per cat plus one extra recommended", "$15-40"),
            item("litter", "Cat litter", "Clumping, unscented recommended for most cats", "$15-30"),
            item("carrier", "Cat carrier", "For vet trips and emergencies", "$20-50"),
        ],
    },
    ChecklistCategory {
        id: "comfort",
        title: "Comfort & Safety",
        items: &[
            item("bed", "Cat bed or blanket", "Cozy spots for napping", "$15-40"),
            item("scratcher", "Scratching post", "Saves your furniture!", "$15-50"),
            item("hiding", "Hiding spot", "Covered bed, box, or cat cave", "$10-30"),
            item("collar", "Breakaway collar with ID tag", "Even for indoor cats", "$10-15"),
        ],
    },
    ChecklistCategory {
        id: "enrichment",
        title: "Enrichment & Play",
        items: &[
            item("toys", "Interactive toys", "Wand toys, balls, mice", "$10-30"),
            item("cat-tree", "Cat tree or perch", "Vertical space for climbing", "$30-150"),
            item("window", "Window perch", "Cats love watching the world", "$20-40"),
        ],
    },
    ChecklistCategory {
        id: "health",
        title: "Health & Grooming",
        items: &[
            item("vet-visit", "Initial vet visit scheduled", "Within first week", "$50-150"),
            item("brush", "Grooming brush", "Type depends on coat length", "$10-20"),
            item("nail-clipper", "Nail clippers", "Cat-specific clippers", "$10-15"),
            item("flea-prevention", "Flea prevention", "Ask your vet for recommendations", "$15-30/month"),
        ],
    },
    ChecklistCategory {
        id: "prep",
        title: "Home Preparation",
        items: &[
            item("cat-proof", "Cat-proof dangerous areas", "Hide cords, secure windows", "Free"),
            item("toxic-plants", "Remove toxic plants", "Lilies, poinsettias, etc.", "Free"),
            item("safe-room", "Set up a safe room", "Quiet space for adjustment", "Free"),
        ],
    },
];

static DOG_CHECKLIST: &[ChecklistCategory] = &[
    ChecklistCategory {
        id: "essentials",
        title: "Day One Essentials",
        items: &[
            item("food", "Quality dog food", "Age and size appropriate", "$20-70"),
            item("bowls", "Food and water bowls", "Non-tip, size-appropriate", "$10-30"),
            item("leash", "Leash (6 ft recommended)", "Sturdy, comfortable grip", "$10-30"),
            item("collar", "Collar with ID tag", "Fitted but not too tight", "$15-25"),
            item("crate", "Crate or kennel", "Sized for adult dog", "$30-100"),
        ],
    },
    ChecklistCategory {
        id: "comfort",
        title: "Comfort & Safety",
        items: &[
            item("bed", "Dog bed", "Washable, size-appropriate", "$20-80"),
            item("blanket", "Cozy blanket", "For crate and bed", "$10-20"),
            item("harness", "Harness (optional)", "Good for dogs who pull", "$20-40"),
            item("gates", "Baby gates", "To block off areas", "$20-50"),
        ],
    },
    ChecklistCategory {
        id: "enrichment",
        title: "Enrichment & Play",
        items: &[
            item("toys", "Assorted toys", "Chew toys, balls, tug toys", "$20-50"),
            item("kong", "KONG or puzzle toy", "Mental stimulation", "$10-20"),
            item("treats", "Training treats", "Small, low-calorie", "$5-15"),
        ],
    },
    ChecklistCategory {
        id: "health",
        title: "Health & Grooming",
        items: &[
            item("vet-visit", "Initial vet visit scheduled", "Within first week", "$50-150"),
            item("brush", "Grooming brush", "Breed-appropriate", "$10-30"),
            item("nail-clipper", "Nail clippers or grinder", "Dog-specific", "$10-25"),
            item("shampoo", "Dog shampoo", "Gentle, dog-safe formula", "$10-20"),
            item("flea-prevention", "Flea & tick prevention", "Ask your vet", "$20-50/month"),
            item("poop-bags", "Poop bags", "Biodegradable preferred", "$10-20"),
        ],
    },
    ChecklistCategory {
        id: "prep",
        title: "Home Preparation",
        items: &[
            item("dog-proof", "Dog-proof home", "Remove hazards, secure trash", "Free"),
            item("yard-check", "Check yard for gaps", "Secure fencing", "Varies"),
            item("schedule", "Establish a routine", "Feeding, walks, potty times", "Free"),
            item("training-plan", "Research training classes", "Positive reinforcement", "$100-300"),
        ],
    },
];

pub fn categories(pet: PetType) -> &'static [ChecklistCategory] {
    match pet {
        PetType::Cat => CAT_CHECKLIST,
        PetType::Dog => DOG_CHECKLIST,
    }
}

/// Every item for a pet type, in display order
pub fn items(pet: PetType) -> impl Iterator<Item = &'static ChecklistItem> {
    categories(pet).iter().flat_map(|c| c.items.iter())
}

/// Checked state for one pet type's list
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistProgress {
    pet: PetType,
    checked: BTreeMap<String, bool>,
}

impl ChecklistProgress {
    pub fn new(pet: PetType) -> Self {
        Self {
            pet,
            checked: BTreeMap::new(),
        }
    }

    pub fn pet(&self) -> PetType {
        self.pet
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Flip an item and return its new state
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_checked(id);
        self.checked.insert(id.to_string(), next);
        next
    }

    /// Checked items that belong to this pet's list
    pub fn checked_count(&self) -> usize {
        items(self.pet).filter(|i| self.is_checked(i.id)).count()
    }

    pub fn total(&self) -> usize {
        items(self.pet).count()
    }

    /// Rounded percentage of the list completed
    pub fn percent(&self) -> u16 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.checked_count() as f64 / total as f64) * 100.0).round() as u16
    }
}

/// Saves progress as `checklist-<pet>.json` in a directory
#[derive(Debug, Clone)]
pub struct ChecklistStore {
    dir: PathBuf,
}

impl ChecklistStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory
    pub fn default_location() -> Option<Self> {
        crate::config::data_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, pet: PetType) -> PathBuf {
        self.dir.join(format!("checklist-{}.json", pet.slug()))
    }

    /// Missing or unreadable files load as an empty list
    pub fn load(&self, pet: PetType) -> ChecklistProgress {
        let path = self.path_for(pet);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ChecklistProgress::new(pet)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read checklist");
                return ChecklistProgress::new(pet);
            }
        };

        match serde_json::from_str::<BTreeMap<String, bool>>(&content) {
            Ok(checked) => ChecklistProgress { pet, checked },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt checklist");
                ChecklistProgress::new(pet)
            }
        }
    }

    pub fn save(&self, progress: &ChecklistProgress) -> Result<(), ChecklistError> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(&progress.checked)?;
        fs::write(self.path_for(progress.pet), content)?;
        Ok(())
    }
}
