mod health_test;
mod purchase_test;
mod register_test;
mod static_test;
