mod load_generator_run;
