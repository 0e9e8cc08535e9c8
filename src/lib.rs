pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod period;
            pub mod ports;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod event_use_cases;
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events_for_period {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_response;
            }
            pub mod outbound {
                pub mod event_repository_in_memory;
            }
        }
    }
}

pub mod shell;
