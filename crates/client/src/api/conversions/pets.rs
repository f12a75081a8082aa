//! Pet type conversion functions.

use crate::api::pets::ApiPet;
use crate::types::Pet;

/// Convert a transport pet into its domain form.
pub(crate) fn convert_pet(pet: ApiPet) -> Pet {
    Pet {
        id: pet.id,
        name: pet.name,
        species: pet.species,
        gender: pet.gender,
        temperament: pet.temperament,
        birth_date: pet.birth_date,
        breed: pet.breed,
        weight_kg: pet.weight_kg,
        behavior_notes: pet.behavior_notes,
        owner: pet.owner_id,
    }
}
