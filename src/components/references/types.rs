//! Reference entry data.

use serde::Deserialize;

/// One person listed in the references section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reference {
	/// Full name.
	pub name: String,
	/// Job title.
	pub position: String,
	/// How this person knows the site owner.
	pub relationship: String,
	/// Contact email, shown in the modal only.
	pub email: String,
	/// Contact phone, shown in the modal only.
	pub phone: String,
	/// Portrait image path.
	pub image: String,
}
