pub mod sizing_service;
