//! The demo dataset: ten clients, twelve pets, four veterinarians.
//!
//! Records are denormalized the way the facades serve them (owner names are
//! copied onto pets). Appointments are not seeded here; they come from the
//! generator so the schedule always brackets the current day.

use vetmock_model::{Client, ClientId, MedicalRecord, Pet, PetId, Result, Vet, VetId, parse_date};

fn client(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    pet_ids: &[&str],
) -> Result<Client> {
    Ok(Client {
        id: ClientId::new(id)?,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        pet_ids: pet_ids.iter().map(|pet| PetId::new(*pet)).collect::<Result<_>>()?,
    })
}

fn pet(
    id: &str,
    name: &str,
    species: &str,
    breed: &str,
    age: u32,
    owner_id: &str,
    owner_name: &str,
    medical_history: Vec<MedicalRecord>,
) -> Result<Pet> {
    Ok(Pet {
        id: PetId::new(id)?,
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age,
        owner_id: ClientId::new(owner_id)?,
        owner_name: owner_name.to_string(),
        medical_history,
    })
}

fn record(date: &str, description: &str, vet: &str) -> Result<MedicalRecord> {
    Ok(MedicalRecord {
        date: parse_date(date)?,
        description: description.to_string(),
        vet: vet.to_string(),
    })
}

fn vet(id: &str, name: &str, specialty: &str, phone: &str, email: &str) -> Result<Vet> {
    Ok(Vet {
        id: VetId::new(id)?,
        name: name.to_string(),
        specialty: specialty.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    })
}

pub fn clients() -> Result<Vec<Client>> {
    Ok(vec![
        client("c1", "María González", "+56 9 1234 5678", "maria.gonzalez@email.com", "Av. Providencia 1234, Santiago", &["p1", "p2"])?,
        client("c2", "Carlos Rodríguez", "+56 9 2345 6789", "carlos.rodriguez@email.com", "Los Leones 567, Providencia", &["p3"])?,
        client("c3", "Ana Martínez", "+56 9 3456 7890", "ana.martinez@email.com", "Av. Apoquindo 890, Las Condes", &["p4", "p5"])?,
        client("c4", "Pedro Silva", "+56 9 4567 8901", "pedro.silva@email.com", "Av. Italia 321, Ñuñoa", &["p6"])?,
        client("c5", "Laura Fernández", "+56 9 5678 9012", "laura.fernandez@email.com", "Manuel Montt 456, Providencia", &["p7"])?,
        client("c6", "Diego Morales", "+56 9 6789 0123", "diego.morales@email.com", "Av. Ossa 789, La Reina", &["p8", "p9"])?,
        client("c7", "Valentina Castro", "+56 9 7890 1234", "valentina.castro@email.com", "Bilbao 234, Providencia", &["p10"])?,
        client("c8", "Francisco López", "+56 9 8901 2345", "francisco.lopez@email.com", "Av. Vitacura 5678, Vitacura", &["p11"])?,
        client("c9", "Camila Herrera", "+56 9 9012 3456", "camila.herrera@email.com", "Pocuro 890, Providencia", &["p12"])?,
        client("c10", "Sebastián Díaz", "+56 9 0123 4567", "sebastian.diaz@email.com", "Av. Las Condes 1234, Las Condes", &[])?,
    ])
}

pub fn pets() -> Result<Vec<Pet>> {
    Ok(vec![
        pet("p1", "Max", "Perro", "Golden Retriever", 3, "c1", "María González", vec![
            record("2024-08-15", "Vacuna antirrábica", "Dr. Muñoz")?,
            record("2024-06-10", "Control general - Buen estado", "Dra. Soto")?,
        ])?,
        pet("p2", "Luna", "Gato", "Siamés", 2, "c1", "María González", vec![
            record("2024-09-20", "Esterilización", "Dra. Soto")?,
        ])?,
        pet("p3", "Rocky", "Perro", "Bulldog Francés", 4, "c2", "Carlos Rodríguez", vec![
            record("2024-07-05", "Tratamiento dermatológico", "Dr. Muñoz")?,
            record("2024-05-12", "Limpieza dental", "Dra. Vargas")?,
        ])?,
        pet("p4", "Mia", "Gato", "Persa", 5, "c3", "Ana Martínez", vec![])?,
        pet("p5", "Simba", "Gato", "Maine Coon", 1, "c3", "Ana Martínez", vec![
            record("2024-10-01", "Primera vacuna", "Dr. Muñoz")?,
        ])?,
        pet("p6", "Toby", "Perro", "Beagle", 6, "c4", "Pedro Silva", vec![
            record("2024-04-22", "Cirugía menor - Lipoma", "Dra. Soto")?,
        ])?,
        pet("p7", "Coco", "Ave", "Cacatúa", 8, "c5", "Laura Fernández", vec![])?,
        pet("p8", "Bruno", "Perro", "Pastor Alemán", 2, "c6", "Diego Morales", vec![
            record("2024-11-10", "Vacunación completa", "Dra. Vargas")?,
        ])?,
        pet("p9", "Nala", "Perro", "Labrador", 4, "c6", "Diego Morales", vec![])?,
        pet("p10", "Michi", "Gato", "Común Europeo", 3, "c7", "Valentina Castro", vec![
            record("2024-08-30", "Control de peso", "Dr. Muñoz")?,
        ])?,
        pet("p11", "Thor", "Perro", "Rottweiler", 5, "c8", "Francisco López", vec![])?,
        pet("p12", "Pelusa", "Conejo", "Holland Lop", 2, "c9", "Camila Herrera", vec![
            record("2024-09-15", "Revisión dental", "Dra. Vargas")?,
        ])?,
    ])
}

pub fn vets() -> Result<Vec<Vet>> {
    Ok(vec![
        vet("v1", "Dr. Alejandro Muñoz", "Medicina General", "+56 9 1111 2222", "a.munoz@cuidadoanimal.cl")?,
        vet("v2", "Dra. Carolina Soto", "Cirugía", "+56 9 2222 3333", "c.soto@cuidadoanimal.cl")?,
        vet("v3", "Dra. Patricia Vargas", "Dermatología", "+56 9 3333 4444", "p.vargas@cuidadoanimal.cl")?,
        vet("v4", "Dr. Roberto Paz", "Cardiología", "+56 9 4444 5555", "r.paz@cuidadoanimal.cl")?,
    ])
}
