//! Schema definition and resolvers.
//!
//! Four root queries mirror the REST endpoints; `appointments` takes a
//! required `date` and an optional `vetId` (the optional filter is part of
//! the client contract). Resolvers are linear scans over the shared
//! repository, and the wire field names are the same camelCase names the
//! REST facade serves.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use vetmock_fixtures::FixtureRepository;
use vetmock_model::{
    Appointment, Client, MedicalRecord, Pet, Vet, VetId, format_date, parse_date,
};

pub type VetSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(repo: Arc<FixtureRepository>) -> VetSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(repo)
        .finish()
}

fn repository<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<FixtureRepository>> {
    ctx.data::<Arc<FixtureRepository>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn clients(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ClientObject>> {
        let repo = repository(ctx)?;
        Ok(repo.clients().iter().cloned().map(ClientObject).collect())
    }

    async fn pets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PetObject>> {
        let repo = repository(ctx)?;
        Ok(repo.pets().iter().cloned().map(PetObject).collect())
    }

    async fn vets(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<VetObject>> {
        let repo = repository(ctx)?;
        Ok(repo.vets().iter().cloned().map(VetObject).collect())
    }

    async fn appointments(
        &self,
        ctx: &Context<'_>,
        date: String,
        vet_id: Option<String>,
    ) -> async_graphql::Result<Vec<AppointmentObject>> {
        let repo = repository(ctx)?;
        let date = parse_date(&date).map_err(|error| async_graphql::Error::new(error.to_string()))?;
        let vet = vet_id
            .filter(|value| !value.trim().is_empty())
            .map(VetId::new)
            .transpose()
            .map_err(|error| async_graphql::Error::new(error.to_string()))?;
        Ok(repo
            .appointments_for(date, vet.as_ref())
            .into_iter()
            .map(AppointmentObject)
            .collect())
    }
}

pub struct ClientObject(Client);

#[Object(name = "Client")]
impl ClientObject {
    async fn id(&self) -> &str {
        self.0.id.as_str()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn phone(&self) -> &str {
        &self.0.phone
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn address(&self) -> &str {
        &self.0.address
    }

    async fn pet_ids(&self) -> Vec<&str> {
        self.0.pet_ids.iter().map(|pet| pet.as_str()).collect()
    }
}

pub struct MedicalRecordObject(MedicalRecord);

#[Object(name = "MedicalRecord")]
impl MedicalRecordObject {
    async fn date(&self) -> String {
        format_date(self.0.date)
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn vet(&self) -> &str {
        &self.0.vet
    }
}

pub struct PetObject(Pet);

#[Object(name = "Pet")]
impl PetObject {
    async fn id(&self) -> &str {
        self.0.id.as_str()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn species(&self) -> &str {
        &self.0.species
    }

    async fn breed(&self) -> &str {
        &self.0.breed
    }

    async fn age(&self) -> u32 {
        self.0.age
    }

    async fn owner_id(&self) -> &str {
        self.0.owner_id.as_str()
    }

    async fn owner_name(&self) -> &str {
        &self.0.owner_name
    }

    async fn medical_history(&self) -> Vec<MedicalRecordObject> {
        self.0
            .medical_history
            .iter()
            .cloned()
            .map(MedicalRecordObject)
            .collect()
    }
}

pub struct VetObject(Vet);

#[Object(name = "Vet")]
impl VetObject {
    async fn id(&self) -> &str {
        self.0.id.as_str()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn specialty(&self) -> &str {
        &self.0.specialty
    }

    async fn phone(&self) -> &str {
        &self.0.phone
    }

    async fn email(&self) -> &str {
        &self.0.email
    }
}

pub struct AppointmentObject(Appointment);

#[Object(name = "Appointment")]
impl AppointmentObject {
    async fn id(&self) -> &str {
        self.0.id.as_str()
    }

    async fn date(&self) -> String {
        format_date(self.0.date)
    }

    async fn time(&self) -> String {
        self.0.time.to_string()
    }

    async fn pet_id(&self) -> &str {
        self.0.pet_id.as_str()
    }

    async fn pet_name(&self) -> &str {
        &self.0.pet_name
    }

    async fn owner_id(&self) -> &str {
        self.0.owner_id.as_str()
    }

    async fn owner_name(&self) -> &str {
        &self.0.owner_name
    }

    async fn vet_id(&self) -> &str {
        self.0.vet_id.as_str()
    }

    async fn vet_name(&self) -> &str {
        &self.0.vet_name
    }

    async fn reason(&self) -> &str {
        &self.0.reason
    }

    async fn status(&self) -> &str {
        self.0.status.as_str()
    }
}
