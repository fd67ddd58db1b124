mod scalar_test;
