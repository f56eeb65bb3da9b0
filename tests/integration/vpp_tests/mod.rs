mod speed;
mod trim;
