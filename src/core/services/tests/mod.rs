mod masters_service_tests;
