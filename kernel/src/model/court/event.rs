use derive_new::new;

#[derive(Debug, new)]
pub struct CreateCourt {
    pub name: String,
    pub hourly_rate: f64,
    pub is_active: bool,
}
