pub mod chat;
pub mod demand;
pub mod dispatch;
pub mod doc;
pub mod feedback;
pub mod file;
pub mod history;
pub mod login;
pub mod logout;
pub mod shared;
pub mod status;
pub mod stop;
pub mod suggest;
