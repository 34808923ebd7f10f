//! Secuencia de persistencia de la reserva
//!
//! Cuatro escrituras secuenciales contra el almacén: buscar/crear el
//! vehículo, resolver el nombre del área, insertar la reserva y marcar
//! la plaza. No hay transacción ni rollback: un fallo a mitad de camino
//! deja las escrituras anteriores en pie.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::area::Area;
use crate::models::booking::{Booking, NewBooking};
use crate::models::slot::SLOT_STATUS_BOOKED;
use crate::models::vehicle::Vehicle;
use crate::repositories::area_repository::AreaRepository;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::slot_repository::SlotRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::wizard::BookingRequest;
use sqlx::PgPool;

/// Operaciones del almacén que la secuencia de envío necesita
#[async_trait]
pub trait ParkingStore: Send + Sync {
    async fn find_vehicle(&self, vehicle_number: &str) -> AppResult<Option<Vehicle>>;
    async fn insert_vehicle(
        &self,
        vehicle_number: &str,
        customer_name: &str,
        contact_number: &str,
    ) -> AppResult<Vehicle>;
    async fn find_area(&self, area_id: &str) -> AppResult<Option<Area>>;
    async fn insert_booking(&self, new_booking: NewBooking) -> AppResult<Booking>;
    async fn update_slot_status(&self, slot_id: &str, status: &str) -> AppResult<()>;
}

/// Almacén respaldado por PostgreSQL
pub struct PgParkingStore {
    vehicles: VehicleRepository,
    areas: AreaRepository,
    slots: SlotRepository,
    bookings: BookingRepository,
}

impl PgParkingStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            areas: AreaRepository::new(pool.clone()),
            slots: SlotRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }
}

#[async_trait]
impl ParkingStore for PgParkingStore {
    async fn find_vehicle(&self, vehicle_number: &str) -> AppResult<Option<Vehicle>> {
        self.vehicles.find_by_number(vehicle_number).await
    }

    async fn insert_vehicle(
        &self,
        vehicle_number: &str,
        customer_name: &str,
        contact_number: &str,
    ) -> AppResult<Vehicle> {
        self.vehicles
            .insert(vehicle_number, customer_name, contact_number)
            .await
    }

    async fn find_area(&self, area_id: &str) -> AppResult<Option<Area>> {
        self.areas.find_by_id(area_id).await
    }

    async fn insert_booking(&self, new_booking: NewBooking) -> AppResult<Booking> {
        self.bookings.insert(new_booking).await
    }

    async fn update_slot_status(&self, slot_id: &str, status: &str) -> AppResult<()> {
        self.slots.update_status(slot_id, status).await
    }
}

/// Resultado del envío exitoso
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub booking: Booking,
    /// Nombre del área, solo para la notificación; no se persiste en la
    /// fila de la reserva
    pub area_name: String,
}

/// Ejecutar la secuencia de escrituras de la reserva.
///
/// Cada paso puede fallar de forma independiente; los pasos anteriores
/// no se revierten.
pub async fn submit_booking(
    store: &dyn ParkingStore,
    request: &BookingRequest,
) -> AppResult<SubmissionOutcome> {
    // Paso 1: revalidar los campos requeridos
    if request.vehicle_number.trim().is_empty() {
        return Err(validation_error("vehicle_number", "must not be empty"));
    }
    if request.customer_name.trim().is_empty() {
        return Err(validation_error("customer_name", "must not be empty"));
    }
    if request.contact_number.trim().is_empty() {
        return Err(validation_error("contact_number", "must not be empty"));
    }

    log::info!(
        "🅿️ Iniciando registro de reserva: plaza {} del área {}",
        request.slot_id,
        request.area_id
    );

    // Paso 2: vehículo por matrícula; si ya existe no se toca, aunque el
    // nombre o el contacto difieran de lo guardado
    match store.find_vehicle(&request.vehicle_number).await? {
        Some(_) => {
            log::info!("🚗 Vehículo {} ya registrado", request.vehicle_number);
        }
        None => {
            store
                .insert_vehicle(
                    &request.vehicle_number,
                    &request.customer_name,
                    &request.contact_number,
                )
                .await?;
            log::info!("🚗 Vehículo {} registrado", request.vehicle_number);
        }
    }

    // Paso 3: nombre del área para la notificación
    let area = store
        .find_area(&request.area_id)
        .await?
        .ok_or_else(|| not_found_error("Area", &request.area_id))?;

    // Paso 4: fila de la reserva
    let booking = store
        .insert_booking(NewBooking {
            vehicle_number: request.vehicle_number.clone(),
            slot_id: request.slot_id.clone(),
            entry_time: request.entry_time,
            exit_time: request.exit_time,
            amount_paid: Decimal::from(request.amount),
        })
        .await?;
    log::info!("📝 Reserva {} insertada, monto {}", booking.id, booking.amount_paid);

    // Paso 5: marcar la plaza. Si esto falla, la fila de la reserva del
    // paso 4 queda igual en estado "booked".
    store
        .update_slot_status(&request.slot_id, SLOT_STATUS_BOOKED)
        .await?;

    log::info!(
        "✅ Reserva {} completada en {}",
        booking.id,
        area.area_name
    );

    Ok(SubmissionOutcome {
        booking,
        area_name: area.area_name,
    })
}
