//! Counselor directory entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CounselorId, ValidationError};

/// A counselor users can browse and open a chat session with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counselor {
    pub id: CounselorId,
    pub name: String,
    pub specialization: String,
    pub description: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub sessions_count: u32,
    pub is_online: bool,
    pub image_url: Option<String>,
}

impl Counselor {
    /// Checks the rating range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::out_of_range(
                "rating",
                1,
                5,
                self.rating as i64,
            ));
        }
        Ok(())
    }
}

fn counselor(
    id: &str,
    name: &str,
    specialization: &str,
    description: &str,
    sessions_count: u32,
    is_online: bool,
    image_url: &str,
) -> Option<Counselor> {
    Some(Counselor {
        id: CounselorId::new(id).ok()?,
        name: name.to_string(),
        specialization: specialization.to_string(),
        description: description.to_string(),
        rating: 5,
        sessions_count,
        is_online,
        image_url: Some(image_url.to_string()),
    })
}

/// The counselors the directory starts with.
pub fn seed_counselors() -> Vec<Counselor> {
    [
        counselor(
            "sarah-wijaya",
            "Dr. Sarah Wijaya",
            "Psikolog Klinis",
            "Spesialis anxiety, depression, dan masalah akademik remaja",
            200,
            true,
            "https://images.unsplash.com/photo-1582750433449-648ed127bb54?auto=format&fit=crop&w=400&h=300",
        ),
        counselor(
            "budi-santoso",
            "Budi Santoso, M.Psi",
            "Konselor Remaja",
            "Ahli dalam masalah percintaan, bullying, dan self-esteem",
            150,
            false,
            "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&w=400&h=300",
        ),
        counselor(
            "rina-sari",
            "Rina Sari, S.Psi",
            "Psikolog Anak & Remaja",
            "Fokus pada trauma, ADHD, dan gangguan perilaku",
            95,
            true,
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&w=400&h=300",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
