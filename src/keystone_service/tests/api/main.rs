mod container_test;
mod delete_account;
mod helpers;
mod login;
mod logout;
mod profile;
mod register;
