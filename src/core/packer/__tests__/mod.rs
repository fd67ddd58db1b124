mod boundary_test;
