mod club;
mod user;
