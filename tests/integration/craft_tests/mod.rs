mod balance;
mod drag;
mod sweep;
