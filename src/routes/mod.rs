pub(crate) mod dashboard;
pub(crate) mod health;
pub(crate) mod items;
pub(crate) mod prices;
