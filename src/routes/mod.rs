pub mod usuario_routes;
