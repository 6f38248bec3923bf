use chrono::{Local, NaiveDate};

/// Port que abstrae la fecha actual.
///
/// La creación de playlists sella la fecha de hoy; recibir el reloj desde
/// fuera permite fijarla en tests y en ejecuciones reproducibles.
pub trait Clock {
  fn today(&self) -> NaiveDate;
}

/// Reloj del sistema, en la zona horaria local.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Reloj que siempre devuelve la misma fecha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    self.0
  }
}

