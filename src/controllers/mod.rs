pub mod usuario_controller;
