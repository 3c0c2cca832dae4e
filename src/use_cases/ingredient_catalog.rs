use crate::domain::entities::{
    Catalog, Category, DEFAULT_EMOJI, Ingredient, ingredient_id_from_name,
};
use crate::domain::errors::PartyError;
use crate::domain::ports::CatalogStore;
use crate::use_cases::storage_failure;

// Fields accepted when adding an ingredient; `name` is the legacy spelling of `name_en`.
#[derive(Default)]
pub struct NewIngredient {
    pub name_en: Option<String>,
    pub name: Option<String>,
    pub name_sk: Option<String>,
    pub emoji: Option<String>,
}

// Partial update; absent fields keep their stored value.
#[derive(Default)]
pub struct IngredientPatch {
    pub name_en: Option<String>,
    pub name: Option<String>,
    pub name_sk: Option<String>,
    pub emoji: Option<String>,
    pub enabled: Option<bool>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

// Full catalog, disabled entries included.
pub struct ListIngredientsUseCase<S> {
    pub store: S,
}

impl<S> ListIngredientsUseCase<S>
where
    S: CatalogStore,
{
    pub async fn execute(&self) -> Result<Catalog, PartyError> {
        self.store.load().await.map_err(storage_failure)
    }
}

// Catalog as shown on the guest page.
pub struct GuestCatalogUseCase<S> {
    pub store: S,
}

impl<S> GuestCatalogUseCase<S>
where
    S: CatalogStore,
{
    pub async fn execute(&self) -> Result<Catalog, PartyError> {
        let catalog = self.store.load().await.map_err(storage_failure)?;
        Ok(catalog.enabled_only())
    }
}

pub struct AddIngredientUseCase<S> {
    pub store: S,
}

impl<S> AddIngredientUseCase<S>
where
    S: CatalogStore,
{
    pub async fn execute(
        &self,
        category: Category,
        input: NewIngredient,
    ) -> Result<Ingredient, PartyError> {
        let name_en = non_blank(input.name_en.as_deref())
            .or_else(|| non_blank(input.name.as_deref()))
            .ok_or(PartyError::IngredientNameRequired)?;

        let id = ingredient_id_from_name(name_en);
        if id.is_empty() {
            return Err(PartyError::UnusableIngredientName);
        }

        let mut catalog = self.store.load().await.map_err(storage_failure)?;
        if catalog.find(category, &id).is_some() {
            return Err(PartyError::DuplicateIngredient);
        }

        let ingredient = Ingredient::new(
            &id,
            name_en,
            non_blank(input.name_sk.as_deref()).unwrap_or(name_en),
            non_blank(input.emoji.as_deref()).unwrap_or(DEFAULT_EMOJI),
        );
        catalog.items_mut(category).push(ingredient.clone());

        self.store.save(&catalog).await.map_err(storage_failure)?;
        Ok(ingredient)
    }
}

pub struct UpdateIngredientUseCase<S> {
    pub store: S,
}

impl<S> UpdateIngredientUseCase<S>
where
    S: CatalogStore,
{
    pub async fn execute(
        &self,
        category: Category,
        id: &str,
        patch: IngredientPatch,
    ) -> Result<Ingredient, PartyError> {
        let mut catalog = self.store.load().await.map_err(storage_failure)?;
        let item = catalog
            .items_mut(category)
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(PartyError::IngredientNotFound)?;

        let name_en = patch
            .name_en
            .as_deref()
            .or(patch.name.as_deref())
            .map(|value| non_blank(Some(value)).ok_or(PartyError::IngredientNameRequired))
            .transpose()?;

        if let Some(name_en) = name_en {
            item.name_en = name_en.to_string();
        }
        if let Some(name_sk) = non_blank(patch.name_sk.as_deref()) {
            item.name_sk = name_sk.to_string();
        }
        if let Some(emoji) = non_blank(patch.emoji.as_deref()) {
            item.emoji = emoji.to_string();
        }
        if let Some(enabled) = patch.enabled {
            item.enabled = enabled;
        }
        let updated = item.clone();

        self.store.save(&catalog).await.map_err(storage_failure)?;
        Ok(updated)
    }
}

pub struct DeleteIngredientUseCase<S> {
    pub store: S,
}

impl<S> DeleteIngredientUseCase<S>
where
    S: CatalogStore,
{
    pub async fn execute(&self, category: Category, id: &str) -> Result<(), PartyError> {
        let mut catalog = self.store.load().await.map_err(storage_failure)?;
        let items = catalog.items_mut(category);
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(PartyError::IngredientNotFound);
        }

        self.store.save(&catalog).await.map_err(storage_failure)
    }
}
